use serde::{Deserialize, Serialize};

/// One searchable row of the person directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub preferred_name: Option<String>,
    pub email: String,
    pub account_name: String,
    pub account_id: String,
}

impl Person {
    pub fn builder(id: &str, first_name: &str, last_name: &str) -> PersonBuilder {
        PersonBuilder::new(id, first_name, last_name)
    }

    /// `First (Preferred) Middle Last`, skipping blank optional parts.
    /// Computed on every call; never persisted.
    pub fn display_name(&self) -> String {
        let mut name = self.first_name.clone();
        if let Some(preferred) = non_blank(&self.preferred_name) {
            name.push_str(" (");
            name.push_str(preferred);
            name.push(')');
        }
        if let Some(middle) = non_blank(&self.middle_name) {
            name.push(' ');
            name.push_str(middle);
        }
        name.push(' ');
        name.push_str(&self.last_name);
        name
    }

    /// The four fields a query term is matched against. Absent fields are empty.
    pub fn name_fields(&self) -> [&str; 4] {
        [
            &self.first_name,
            self.middle_name.as_deref().unwrap_or(""),
            &self.last_name,
            self.preferred_name.as_deref().unwrap_or(""),
        ]
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    fn new(id: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            person: Person {
                id: id.to_string(),
                first_name: first_name.to_string(),
                middle_name: None,
                last_name: last_name.to_string(),
                preferred_name: None,
                email: String::new(),
                account_name: String::new(),
                account_id: String::new(),
            },
        }
    }

    pub fn middle_name(mut self, middle: &str) -> Self {
        self.person.middle_name = Some(middle.to_string());
        self
    }

    pub fn preferred_name(mut self, preferred: &str) -> Self {
        self.person.preferred_name = Some(preferred.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.person.email = email.to_string();
        self
    }

    pub fn account(mut self, account_name: &str, account_id: &str) -> Self {
        self.person.account_name = account_name.to_string();
        self.person.account_id = account_id.to_string();
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_first_middle_last() {
        let p = Person::builder("1", "Alice", "Jones").middle_name("Walker").build();
        assert_eq!(p.display_name(), "Alice Walker Jones");
    }

    #[test]
    fn display_name_includes_preferred_in_parens() {
        let p = Person::builder("1", "Charles", "Stone")
            .middle_name("Robert")
            .preferred_name("Chris")
            .build();
        assert_eq!(p.display_name(), "Charles (Chris) Robert Stone");
    }

    #[test]
    fn display_name_skips_blank_optionals() {
        let p = Person::builder("1", "Kurt", "Smitham")
            .middle_name("   ")
            .preferred_name("")
            .build();
        assert_eq!(p.display_name(), "Kurt Smitham");
    }

    #[test]
    fn display_name_is_stable_across_reads() {
        let p = Person::builder("1", "Ann Marie", "Miller").middle_name("Sophia").build();
        let before = p.clone();
        assert_eq!(p.display_name(), p.display_name());
        assert_eq!(p, before);
    }

    #[test]
    fn name_fields_fill_absent_with_empty() {
        let p = Person::builder("1", "Brad", "St. Phillips").build();
        assert_eq!(p.name_fields(), ["Brad", "", "St. Phillips", ""]);
    }
}
