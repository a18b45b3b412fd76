use crate::model::Person;

///
/// PersonRepository
///
/// Storage seam for the person service. Implementations own their data.
///

pub trait PersonRepository {
    fn all(&self) -> &[Person];

    fn get(&self, id: i32) -> Option<&Person>;

    fn get_mut(&mut self, id: i32) -> Option<&mut Person>;

    /// Store `person` and return the stored value.
    fn insert(&mut self, person: Person) -> &Person;
}

///
/// InMemoryPersons
///

#[derive(Clone, Debug, Default)]
pub struct InMemoryPersons {
    persons: Vec<Person>,
}

impl InMemoryPersons {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persons: Vec::new(),
        }
    }

    /// Repository holding the three sample persons.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            persons: vec![
                Person::new(1, "Jane", "Doe", "Nyhavn 1", "1051", "Copenhagen K", 23),
                Person::new(2, "John", "Doe", "Nyhavn 1", "1051", "Copenhagen K", 25),
                Person::new(
                    3,
                    "Hans-Christian",
                    "Andersern",
                    "Bangs Boder 29",
                    "5000",
                    "Odense C",
                    70,
                ),
            ],
        }
    }
}

impl PersonRepository for InMemoryPersons {
    fn all(&self) -> &[Person] {
        &self.persons
    }

    fn get(&self, id: i32) -> Option<&Person> {
        self.persons.iter().find(|person| person.id == id)
    }

    fn get_mut(&mut self, id: i32) -> Option<&mut Person> {
        self.persons.iter_mut().find(|person| person.id == id)
    }

    fn insert(&mut self, person: Person) -> &Person {
        self.persons.push(person);
        &self.persons[self.persons.len() - 1]
    }
}

///
/// TESTS
///
