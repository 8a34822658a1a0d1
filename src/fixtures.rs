use crate::person::Person;

/// Hand-authored people inserted alongside generated data so that search
/// behaviour can be checked against known names.
pub fn fixture_people() -> Vec<Person> {
    vec![
        fixture("01FAR5W5AZYWCRW9JNHM8N7C1", "Alice", "Walker", "Jones", None, "Alice.Jones@gmail.COM", "AlJones", "87e74492-66e7-4372-adb0-4f802da4f71"),
        fixture("01FAR5W5AZYWCRW9JNHM8N7C7", "Stephen", "Franklin", "Glover Jr.", None, "Stephen.GloverJr.@gmail.COM", "StGloverJr.", "87e74492-66e7-4372-adb0-4f802da4f77"),
        fixture("01FAR5W5AZYWCRW9JNHM8N7C8", "Brad", "Edward", "St. Phillips", None, "Brad.St.Phillips@gmail.COM", "BrSt.Phillips", "87e74492-66e7-4372-adb0-4f802da4f78"),
        fixture("01FAR5W5AZYWCRW9JNHM8N7C10", "Kurt", "Jadyn", "Smitham", None, "Kurt.Smitham@gmail.COM", "KuSmitham", "87e74492-66e7-4372-adb0-4f802da4f710"),
        fixture("01FAR5W5AZYWCRW9JNHM8N7C11", "Charles", "Robert", "Stone", Some("Chris"), "Charles.Stone@gmail.COM", "ChStone", "87e74492-66e7-4372-adb0-4f802da4f711"),
        fixture("01FAR5W5AZYWCRW9JNHM8N7C12", "Ann Marie", "Sophia", "Miller", None, "AnnMarie.Miller@gmail.COM", "AnMiller", "87e74492-66e7-4372-adb0-4f802da4f712"),
        fixture("01FAR5W5AZYWCRW9JNHM8N7C13", "Mary Beth", "Sophia", "Sutton Chapman", None, "MaryBeth.SuttonChapman@gmail.COM", "MaSuttonChapman", "87e74492-66e7-4372-adb0-4f802da4f713"),
        fixture("01FAR5W5AZYWCRW9JNHM8N7C16", "Charlotte", "Isabel", "Smith-Collins", None, "Charlotte.Smith-Collins@gmail.COM", "ChSmith-Collins", "87e74492-66e7-4372-adb0-4f802da4f716"),
        fixture("01FAR5W5AZYWCRW9JNHM8N7C19", "William \"Jim\"", "David", "Thomas", None, "Jim.Thomas@gmail.COM", "WiThomas", "87e74492-66e7-4372-adb0-4f802da4f719"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn fixture(
    id: &str,
    first: &str,
    middle: &str,
    last: &str,
    preferred: Option<&str>,
    email: &str,
    account_name: &str,
    account_id: &str,
) -> Person {
    let builder = Person::builder(id, first, last)
        .middle_name(middle)
        .email(email)
        .account(account_name, account_id);
    match preferred {
        Some(p) => builder.preferred_name(p).build(),
        None => builder.build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_ids_are_unique() {
        let people = fixture_people();
        let ids: HashSet<&str> = people.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), people.len());
    }

    #[test]
    fn preferred_name_fixture_renders() {
        let people = fixture_people();
        let charles = people.iter().find(|p| p.first_name == "Charles").unwrap();
        assert_eq!(charles.display_name(), "Charles (Chris) Robert Stone");
    }
}
