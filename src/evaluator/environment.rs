use super::errors::{EvaluatorError, RuntimeResult};
use super::object::{Entity, Object};
use crate::frontend::constants::BUILTIN_OBJECTS;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Flat symbol table for one evaluation run. Names are bound once and keep
/// the order they were bound in.
#[derive(Debug, Default)]
pub struct Environment {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Binds a new name. Rebinding an existing name is an error.
    pub fn define(&mut self, entity: Entity) -> RuntimeResult<()> {
        match self.index.entry(entity.name.clone()) {
            Entry::Occupied(o) => Err(EvaluatorError::Redefinition(o.key().clone())),
            Entry::Vacant(v) => {
                v.insert(self.entities.len());
                self.entities.push(entity);
                Ok(())
            }
        }
    }

    /// Get entity bound to name.
    pub fn get(&self, name: &str) -> RuntimeResult<&Entity> {
        match self.index.get(name) {
            Some(&idx) => Ok(&self.entities[idx]),
            None => Err(EvaluatorError::UndefinedIdentifier(name.to_owned())),
        }
    }

    /// Merges properties into a built-in object, creating it on first use.
    /// Incoming keys replace existing ones, other keys are kept.
    pub fn modify_builtin(
        &mut self,
        name: &str,
        properties: BTreeMap<String, Object>,
    ) -> RuntimeResult<()> {
        if !BUILTIN_OBJECTS.contains(&name) {
            return Err(EvaluatorError::NotABuiltin(name.to_owned()));
        }

        match self.index.get(name).copied() {
            Some(idx) => match &mut self.entities[idx].value {
                Object::Dictionary(existing) => existing.extend(properties),
                other => *other = Object::Dictionary(properties),
            },
            None => {
                self.index.insert(name.to_owned(), self.entities.len());
                self.entities
                    .push(Entity::new(name, name, Object::Dictionary(properties)));
            }
        }

        Ok(())
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }
}
