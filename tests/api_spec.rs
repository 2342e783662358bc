use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use lineage::api::create_router;
use lineage::archive::Archive;
use lineage::models::{Person, PersonId};
use lineage::views::{PersonDetail, TableRow, TimelineEntry, TreeViewModel};

fn person(id: u32, first: &str, last: &str, generation: u32, birth: Option<&str>) -> Person {
    Person {
        id: PersonId(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        location: "Theed, Naboo".to_string(),
        date_of_birth: birth.map(str::to_string),
        date_of_death: None,
        generation,
        parent_ids: vec![],
        sibling_ids: vec![],
        children_ids: vec![],
    }
}

fn setup() -> TestServer {
    let mut luke = person(1, "Luke", "Skywalker", 1, Some("19 BBY"));
    luke.parent_ids = vec![PersonId(2), PersonId(99)];
    let archive = Archive::from_records(vec![
        luke,
        person(2, "Anakin", "Skywalker", 2, Some("41 BBY")),
        person(3, "Rey", "Skywalker", 1, None),
    ])
    .expect("Failed to build archive");

    let app = create_router(Arc::new(archive));
    TestServer::new(app).expect("Failed to create test server")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_ok_and_the_people_count() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["people"], 3);
    }
}

mod people {
    use super::*;

    #[tokio::test]
    async fn lists_everyone_in_document_order() {
        let server = setup();

        let response = server.get("/api/v1/people").await;

        response.assert_status_ok();
        let people: Vec<Person> = response.json();
        let ids: Vec<PersonId> = people.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PersonId(1), PersonId(2), PersonId(3)]);
    }

    #[tokio::test]
    async fn returns_the_detail_view_for_a_known_person() {
        let server = setup();

        let response = server.get("/api/v1/people/1").await;

        response.assert_status_ok();
        let detail: PersonDetail = response.json();
        assert_eq!(detail.name, "Luke Skywalker");
        // The dangling parent id is omitted, not surfaced.
        assert_eq!(detail.parents.len(), 1);
        assert_eq!(detail.parents[0].name, "Anakin Skywalker");
        assert!(detail.siblings.is_empty());
    }

    #[tokio::test]
    async fn returns_not_found_for_an_unknown_person() {
        let server = setup();

        let response = server.get("/api/v1/people/42").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod table_view {
    use super::*;

    #[tokio::test]
    async fn defaults_to_first_name_ascending() {
        let server = setup();

        let response = server.get("/api/v1/views/table").await;

        response.assert_status_ok();
        let rows: Vec<TableRow> = response.json();
        let names: Vec<&str> = rows.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, vec!["Anakin", "Luke", "Rey"]);
    }

    #[tokio::test]
    async fn honors_sort_and_direction_parameters() {
        let server = setup();

        let response = server
            .get("/api/v1/views/table?sort=dateOfBirth&dir=desc")
            .await;

        response.assert_status_ok();
        let rows: Vec<TableRow> = response.json();
        let names: Vec<&str> = rows.iter().map(|r| r.first_name.as_str()).collect();
        // Descending: missing birth date first, then newest to oldest.
        assert_eq!(names, vec!["Rey", "Luke", "Anakin"]);
    }

    #[tokio::test]
    async fn rejects_an_unknown_sort_column() {
        let server = setup();

        let response = server.get("/api/v1/views/table?sort=shoeSize").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_an_unknown_sort_direction() {
        let server = setup();

        let response = server.get("/api/v1/views/table?dir=sideways").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

mod tree_view {
    use super::*;

    #[tokio::test]
    async fn returns_generation_groups_and_resolved_edges() {
        let server = setup();

        let response = server.get("/api/v1/views/tree").await;

        response.assert_status_ok();
        let tree: TreeViewModel = response.json();

        let numbers: Vec<u32> = tree.generations.iter().map(|g| g.generation).collect();
        assert_eq!(numbers, vec![2, 1]);

        // Luke's dangling parent 99 must not appear as an edge.
        assert_eq!(tree.edges.len(), 1);
        assert_eq!(tree.edges[0].child_id, PersonId(1));
        assert_eq!(tree.edges[0].parent_id, PersonId(2));
    }
}

mod timeline_view {
    use super::*;

    #[tokio::test]
    async fn returns_entries_in_birth_order_with_unknowns_last() {
        let server = setup();

        let response = server.get("/api/v1/views/timeline").await;

        response.assert_status_ok();
        let entries: Vec<TimelineEntry> = response.json();
        let years: Vec<&str> = entries.iter().map(|e| e.display_year.as_str()).collect();
        assert_eq!(years, vec!["41 BBY", "19 BBY", "Unknown"]);
    }
}
