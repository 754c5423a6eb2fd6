use crate::models::person::{Identity, Person, PersonId};
use std::collections::HashMap;

/// Everyone seen in the punch input, in first-sighting order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    people: Vec<Person>,
    by_name: HashMap<String, PersonId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a person up by name, creating them on first sighting.
    ///
    /// `identity` is only recorded when the person is created.
    pub fn get_or_insert(&mut self, name: &str, identity: Identity) -> &mut Person {
        let id = match self.by_name.get(name) {
            Some(id) => *id,
            None => {
                let id = PersonId(self.people.len());
                self.people.push(Person::new(id, name, identity));
                self.by_name.insert(name.to_string(), id);
                id
            }
        };
        &mut self.people[id.0]
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<&Person> {
        self.by_name.get(name).and_then(|id| self.get(*id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.people.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Zero every person's counters, keeping their punches.
    pub fn reset_counters(&mut self) {
        for p in &mut self.people {
            p.counters = Default::default();
        }
    }

    /// Total number of (person, day) punch records.
    pub fn record_count(&self) -> usize {
        self.people.iter().map(|p| p.punches.len()).sum()
    }
}
