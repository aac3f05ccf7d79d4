use crate::common::{MOCK_PEOPLE, MOCK_PLANETS, MockCatalog, TestApp, routes};

/// One page request plus one detail request per item.
fn population_requests(items: usize) -> usize {
    1 + items
}

mod people {
    use super::*;

    #[tokio::test]
    async fn empty_table_is_populated_from_the_catalog() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::ALL_PEOPLE).await;

        assert_eq!(res.status, 200, "{}", res.text);
        let rows = res.body.as_array().unwrap();
        assert_eq!(rows.len(), MOCK_PEOPLE.len());
        assert_eq!(rows[0]["name"], "Luke Skywalker");
        assert_eq!(rows[0]["description"], "A farm boy from Tatooine");
        assert_eq!(rows[2]["name"], "R2-D2");
        assert_eq!(app.catalog.hits(), population_requests(MOCK_PEOPLE.len()));
    }

    #[tokio::test]
    async fn second_listing_does_not_call_the_catalog() {
        let app = TestApp::spawn().await;

        let first = app.get(routes::ALL_PEOPLE).await;
        assert_eq!(first.status, 200);
        let hits_after_first = app.catalog.hits();

        let second = app.get(routes::ALL_PEOPLE).await;

        assert_eq!(second.status, 200);
        assert_eq!(second.body, first.body);
        assert_eq!(app.catalog.hits(), hits_after_first);
        assert_eq!(app.count_people().await, MOCK_PEOPLE.len() as u64);
    }

    #[tokio::test]
    async fn populated_table_never_calls_the_catalog() {
        let app = TestApp::spawn().await;
        app.insert_people("Obi-Wan Kenobi").await;

        let res = app.get(routes::ALL_PEOPLE).await;

        assert_eq!(res.status, 200);
        let rows = res.body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Obi-Wan Kenobi");
        assert_eq!(app.catalog.hits(), 0);
    }

    #[tokio::test]
    async fn catalog_failure_leaves_the_table_empty() {
        let app = TestApp::spawn_with_catalog(MockCatalog::start_failing().await).await;

        let res = app.get(routes::ALL_PEOPLE).await;

        assert_eq!(res.status, 502);
        assert_eq!(res.body["code"], "UPSTREAM_ERROR");
        assert!(res.body["message"].as_str().unwrap().starts_with("Error: "));
        assert_eq!(app.count_people().await, 0);
    }

    #[tokio::test]
    async fn failed_insert_rolls_back_the_whole_page() {
        let app = TestApp::spawn().await;
        app.reject_inserts_named("people", "R2-D2").await;

        let res = app.get(routes::ALL_PEOPLE).await;

        assert_eq!(res.status, 500, "{}", res.text);
        assert_eq!(res.body["code"], "PERSISTENCE_ERROR");
        let message = res.body["message"].as_str().unwrap();
        assert!(message.starts_with("Error: "));
        assert!(message.contains("rejected R2-D2"), "{message}");
        assert_eq!(app.count_people().await, 0);
    }

    #[tokio::test]
    async fn single_person_can_be_fetched_after_population() {
        let app = TestApp::spawn().await;
        app.get(routes::ALL_PEOPLE).await;

        let res = app.get(&routes::people(2)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], 2);
        assert_eq!(res.body["name"], "C-3PO");
    }

    #[tokio::test]
    async fn unknown_person_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::people(42)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "Personaje no encontrado");
    }
}

mod planets {
    use super::*;

    #[tokio::test]
    async fn empty_table_is_populated_exactly_once() {
        let app = TestApp::spawn().await;

        let first = app.get(routes::ALL_PLANETS).await;
        assert_eq!(first.status, 200, "{}", first.text);
        let rows = first.body.as_array().unwrap();
        assert_eq!(rows.len(), MOCK_PLANETS.len());
        assert_eq!(rows[1]["name"], "Alderaan");
        assert_eq!(app.catalog.hits(), population_requests(MOCK_PLANETS.len()));

        let second = app.get(routes::ALL_PLANETS).await;

        assert_eq!(second.status, 200);
        assert_eq!(app.catalog.hits(), population_requests(MOCK_PLANETS.len()));
        assert_eq!(app.count_planets().await, MOCK_PLANETS.len() as u64);
    }

    #[tokio::test]
    async fn populating_planets_does_not_touch_people() {
        let app = TestApp::spawn().await;

        app.get(routes::ALL_PLANETS).await;

        assert_eq!(app.count_people().await, 0);
    }

    #[tokio::test]
    async fn catalog_failure_is_reported_and_retried_on_next_listing() {
        let app = TestApp::spawn_with_catalog(MockCatalog::start_failing().await).await;

        let first = app.get(routes::ALL_PLANETS).await;
        assert_eq!(first.status, 502);
        let hits_after_first = app.catalog.hits();

        let second = app.get(routes::ALL_PLANETS).await;

        assert_eq!(second.status, 502);
        assert!(app.catalog.hits() > hits_after_first);
        assert_eq!(app.count_planets().await, 0);
    }

    #[tokio::test]
    async fn failed_insert_rolls_back_the_whole_page() {
        let app = TestApp::spawn().await;
        app.reject_inserts_named("planet", "Alderaan").await;

        let res = app.get(routes::ALL_PLANETS).await;

        assert_eq!(res.status, 500, "{}", res.text);
        assert_eq!(res.body["code"], "PERSISTENCE_ERROR");
        assert!(res.body["message"].as_str().unwrap().contains("rejected Alderaan"));
        assert_eq!(app.count_planets().await, 0);
    }

    #[tokio::test]
    async fn single_planet_can_be_fetched() {
        let app = TestApp::spawn().await;
        let id = app.insert_planet("Hoth").await;

        let res = app.get(&routes::planet(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["name"], "Hoth");
        assert_eq!(res.body["description"], "The planet Hoth");
    }

    #[tokio::test]
    async fn unknown_planet_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::planet(42)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "Elemento planeta no encontrado");
    }
}
