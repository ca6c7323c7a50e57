use super::object::Entity;
use std::fmt;

/// Entities of a finished run, grouped by class in the order each class
/// was first declared. Entities keep their declaration order within a group.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct EvaluatedValues {
    groups: Vec<(String, Vec<Entity>)>,
}

impl EvaluatedValues {
    pub fn from_entities<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        let mut groups: Vec<(String, Vec<Entity>)> = vec![];

        for entity in entities {
            match groups.iter_mut().find(|(class, _)| *class == entity.class) {
                Some((_, group)) => group.push(entity),
                None => groups.push((entity.class.clone(), vec![entity])),
            }
        }

        EvaluatedValues { groups }
    }

    /// Entities declared under `class`, e.g. `"SPHERE"`.
    pub fn get(&self, class: &str) -> Option<&[Entity]> {
        self.groups
            .iter()
            .find(|(name, _)| name == class)
            .map(|(_, group)| group.as_slice())
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(class, _)| class.as_str())
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.groups.iter().flat_map(|(_, group)| group.iter())
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Display for EvaluatedValues {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entity in self.entities() {
            writeln!(f, "{}", entity)?;
        }
        Ok(())
    }
}
