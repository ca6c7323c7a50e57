/// Deepest expression nesting the parser accepts before bailing out.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Objects that exist without being declared and can only be changed with `MODIFY`.
pub const BUILTIN_OBJECTS: [&str; 1] = ["CAMERA"];
