use std::io::Write;

use lineage::archive::{Archive, ArchiveError};
use lineage::models::{Person, PersonId};
use speculate2::speculate;

fn person(id: u32, first: &str, last: &str) -> Person {
    Person {
        id: PersonId(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        location: "Theed, Naboo".to_string(),
        date_of_birth: Some("41 BBY".to_string()),
        date_of_death: None,
        generation: 1,
        parent_ids: vec![],
        sibling_ids: vec![],
        children_ids: vec![],
    }
}

const DOCUMENT: &str = r#"{
    "familyData": [
        {
            "id": 1,
            "firstName": "Shmi",
            "lastName": "Skywalker",
            "location": "Mos Espa, Tatooine",
            "dateOfBirth": "72 BBY",
            "dateOfDeath": "22 BBY",
            "generation": 2,
            "parentIds": [],
            "siblingIds": [],
            "childrenIds": [2]
        },
        {
            "id": 2,
            "firstName": "Anakin",
            "lastName": "Skywalker",
            "location": "Mos Espa, Tatooine",
            "dateOfBirth": "41 BBY",
            "dateOfDeath": null,
            "generation": 1,
            "parentIds": [1],
            "siblingIds": [],
            "childrenIds": []
        }
    ]
}"#;

speculate! {
    describe "from_records" {
        it "indexes every record by id" {
            let archive = Archive::from_records(vec![
                person(1, "Shmi", "Skywalker"),
                person(2, "Anakin", "Skywalker"),
            ]).expect("Failed to build archive");

            assert_eq!(archive.len(), 2);
            assert_eq!(
                archive.find_by_id(PersonId(2)).map(|p| p.first_name.as_str()),
                Some("Anakin")
            );
        }

        it "rejects a duplicate id" {
            let result = Archive::from_records(vec![
                person(1, "Shmi", "Skywalker"),
                person(1, "Anakin", "Skywalker"),
            ]);

            assert!(matches!(result, Err(ArchiveError::DuplicateId(PersonId(1)))));
        }

        it "accepts an empty record list" {
            let archive = Archive::from_records(vec![]).expect("Failed to build archive");
            assert!(archive.is_empty());
        }
    }

    describe "find_by_id" {
        it "returns None for an id nobody has" {
            let archive = Archive::from_records(vec![person(1, "Shmi", "Skywalker")])
                .expect("Failed to build archive");

            assert!(archive.find_by_id(PersonId(99)).is_none());
        }
    }

    describe "resolve" {
        it "omits dangling ids and keeps the order of the rest" {
            let archive = Archive::from_records(vec![
                person(1, "Shmi", "Skywalker"),
                person(2, "Anakin", "Skywalker"),
            ]).expect("Failed to build archive");

            let resolved = archive.resolve(&[PersonId(2), PersonId(77), PersonId(1)]);
            let names: Vec<&str> = resolved.iter().map(|p| p.first_name.as_str()).collect();
            assert_eq!(names, vec!["Anakin", "Shmi"]);
        }

        it "resolves an empty list to an empty list" {
            let archive = Archive::from_records(vec![person(1, "Shmi", "Skywalker")])
                .expect("Failed to build archive");

            assert!(archive.resolve(&[]).is_empty());
        }
    }

    describe "all" {
        it "preserves document order" {
            let archive = Archive::from_records(vec![
                person(3, "Luke", "Skywalker"),
                person(1, "Shmi", "Skywalker"),
                person(2, "Anakin", "Skywalker"),
            ]).expect("Failed to build archive");

            let ids: Vec<PersonId> = archive.all().iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![PersonId(3), PersonId(1), PersonId(2)]);
        }
    }

    describe "from_json_str" {
        it "parses the familyData document shape" {
            let archive = Archive::from_json_str(DOCUMENT).expect("Failed to parse document");

            assert_eq!(archive.len(), 2);
            let anakin = archive.find_by_id(PersonId(2)).expect("Anakin missing");
            assert_eq!(anakin.parent_ids, vec![PersonId(1)]);
            assert!(anakin.date_of_death.is_none());
        }

        it "fails on a document without the familyData key" {
            let result = Archive::from_json_str(r#"{ "people": [] }"#);
            assert!(matches!(result, Err(ArchiveError::Parse(_))));
        }

        it "fails on a record missing required fields" {
            let result = Archive::from_json_str(r#"{ "familyData": [ { "id": 1 } ] }"#);
            assert!(matches!(result, Err(ArchiveError::Parse(_))));
        }
    }

    describe "load" {
        it "reads the document from disk" {
            let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
            write!(file, "{}", DOCUMENT).expect("Failed to write temp file");

            let archive = Archive::load(file.path()).expect("Failed to load archive");
            assert_eq!(archive.len(), 2);
        }

        it "fails with an Io error when the file is missing" {
            let result = Archive::load("no/such/family.json");
            assert!(matches!(result, Err(ArchiveError::Io(_))));
        }
    }
}
