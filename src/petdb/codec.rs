//! Line codec for the data file.
//!
//! Each pet occupies one line, `"<name> <age>\n"`. Blank lines are not
//! records; callers filter them with [`is_blank`] before decoding.

use crate::error::Result;
use crate::model::Pet;

pub fn encode(pet: &Pet) -> String {
    format!("{} {}\n", pet.name(), pet.age())
}

pub fn decode(line: &str) -> Result<Pet> {
    line.parse()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PetDbError;

    #[test]
    fn encodes_name_then_age() {
        let pet = Pet::new("Rex", 3).unwrap();
        assert_eq!(encode(&pet), "Rex 3\n");
    }

    #[test]
    fn decode_accepts_every_encoded_pet() {
        for name in ["Rex", "biscuit", "Mr.Whiskers", "ポチ", "Zoë"] {
            for age in 1..=20 {
                let pet = Pet::new(name, age).unwrap();
                assert_eq!(decode(&encode(&pet)).unwrap(), pet, "{} {}", name, age);
            }
        }
    }

    #[test]
    fn decode_propagates_parse_errors() {
        assert!(matches!(
            decode("Rex 3 4"),
            Err(PetDbError::MalformedRecord(_))
        ));
        assert!(matches!(decode("Rex 42"), Err(PetDbError::InvalidAge(42))));
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t "));
        assert!(!is_blank(" Rex 3"));
    }
}
