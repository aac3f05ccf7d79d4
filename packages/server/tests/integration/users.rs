use sea_orm::EntityTrait;
use serde_json::json;

use holocron_server::entity::user;

use crate::common::{TestApp, routes};

mod creation {
    use super::*;

    #[tokio::test]
    async fn user_with_every_field_is_persisted() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::USER,
                &json!({
                    "username": "lskywalker",
                    "name": "Luke Skywalker",
                    "email": "luke@rebellion.org",
                    "password": "usetheforce",
                }),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["username"], "lskywalker");
        assert_eq!(res.body["name"], "Luke Skywalker");
        assert_eq!(res.body["email"], "luke@rebellion.org");
        assert!(res.body["created_at"].is_string());
        assert!(res.body.get("password").is_none());

        let stored = user::Entity::find_by_id(res.id())
            .one(&app.db)
            .await
            .expect("DB query failed")
            .expect("User not found after creation");
        assert_eq!(stored.username, "lskywalker");
        assert_eq!(stored.name, "Luke Skywalker");
        assert_eq!(stored.email, "luke@rebellion.org");
        assert_eq!(stored.password, "usetheforce");

        let fetched = app.get(&routes::user(res.id())).await;
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body["email"], "luke@rebellion.org");
    }

    #[tokio::test]
    async fn each_missing_field_is_reported_by_name() {
        let app = TestApp::spawn().await;
        let full = json!({
            "username": "hsolo",
            "name": "Han Solo",
            "email": "han@falcon.net",
            "password": "kesselrun",
        });

        for field in ["username", "name", "email", "password"] {
            let mut body = full.clone();
            body.as_object_mut().unwrap().remove(field);

            let res = app.post(routes::USER, &body).await;

            assert_eq!(res.status, 400, "missing {field}: {}", res.text);
            assert_eq!(res.body["code"], "VALIDATION_ERROR");
            assert_eq!(
                res.body["message"],
                format!("Se debe enviar correctamente el {field}")
            );
        }

        assert_eq!(app.count_users().await, 0);
    }

    #[tokio::test]
    async fn null_and_blank_fields_count_as_missing() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::USER,
                &json!({
                    "username": "leia",
                    "name": null,
                    "email": "leia@alderaan.gov",
                    "password": "hope",
                }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["message"], "Se debe enviar correctamente el name");

        let res = app
            .post(
                routes::USER,
                &json!({
                    "username": "leia",
                    "name": "Leia Organa",
                    "email": "   ",
                    "password": "hope",
                }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["message"], "Se debe enviar correctamente el email");
    }

    #[tokio::test]
    async fn empty_object_reports_the_username_first() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::USER, &json!({})).await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["message"],
            "Se debe enviar correctamente el username"
        );
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .client
            .post(format!("http://{}{}", app.addr, routes::USER))
            .header("Content-Type", "application/json")
            .body("{\"username\": ")
            .send()
            .await
            .expect("Failed to send POST request");

        assert_eq!(res.status().as_u16(), 400);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let app = TestApp::spawn().await;
        app.create_user("wedge").await;

        let res = app
            .post(
                routes::USER,
                &json!({
                    "username": "wedge2",
                    "name": "Wedge Antilles",
                    "email": "wedge@rebellion.org",
                    "password": "xwing",
                }),
            )
            .await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "CONFLICT");
        assert_eq!(app.count_users().await, 1);
    }
}

mod retrieval {
    use super::*;

    #[tokio::test]
    async fn list_returns_every_user_without_passwords() {
        let app = TestApp::spawn().await;
        let first = app.create_user("luke").await;
        let second = app.create_user("leia").await;

        let res = app.get(routes::ALL_USERS).await;

        assert_eq!(res.status, 200);
        let users = res.body.as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0]["id"], first);
        assert_eq!(users[1]["id"], second);
        assert!(users.iter().all(|u| u.get("password").is_none()));
    }

    #[tokio::test]
    async fn empty_table_lists_as_empty_array() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::ALL_USERS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::user(999)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
        assert_eq!(res.body["message"], "Usuario no encontrado");
    }
}
