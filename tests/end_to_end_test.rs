//! Full stack: wired adapters, file-backed session, mock HTTP backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nexus_lib::bootstrap::wire_dependencies;
use nx_app::app_paths::AppPaths;
use nx_app::App;
use nx_core::app_dirs::AppDirs;
use nx_core::ports::UiPort;
use nx_core::{AccountType, Alert, AppConfig, Route, StorageBackend, UserProfile};

#[derive(Default)]
struct RecordingUi {
    routes: Mutex<Vec<Route>>,
    alerts: Mutex<Vec<Alert>>,
}

#[async_trait]
impl UiPort for RecordingUi {
    async fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }

    async fn alert(&self, alert: Alert) {
        self.alerts.lock().unwrap().push(alert);
    }
}

fn app_for(server: &mockito::ServerGuard, root: &std::path::Path, ui: Arc<RecordingUi>) -> App {
    let paths = AppPaths::from_app_dirs(&AppDirs {
        app_data_root: root.to_path_buf(),
    });
    let config = AppConfig {
        api_base_url: Some(server.url()),
        request_timeout_secs: Some(5),
        storage: StorageBackend::File,
    };
    App::new(wire_dependencies(&config, &paths, ui).unwrap())
}

#[tokio::test]
async fn login_profile_logout_round() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(200)
        .with_body(r#"{"access_token":"tok-9","token_type":"bearer","role":"SERVICEPROVIDER"}"#)
        .create_async()
        .await;
    let profile_mock = server
        .mock("GET", "/profile")
        .match_header("authorization", "Bearer tok-9")
        .with_status(200)
        .with_body(
            r#"{"account_type":"SERVICEPROVIDER","username":"sam","email":"sam@fix.it","first_name":"Sam","last_name":"Fixit","address":"2 Side St","trade":"PLUMBER"}"#,
        )
        .create_async()
        .await;

    let root = tempfile::TempDir::new().unwrap();
    let ui = Arc::new(RecordingUi::default());
    let app = app_for(&server, root.path(), ui.clone());

    let form = nx_core::LoginForm::new()
        .with_username("sam")
        .with_password("Passw0rd");
    let session = app.usecases().submit_login().execute(form).await.unwrap();
    assert_eq!(session.role, AccountType::ServiceProvider);

    // A second process sees the same session.
    let restarted = app_for(&server, root.path(), ui.clone());
    assert_eq!(
        restarted.usecases().resolve_start_route().execute().await,
        Route::Home
    );

    let profile = restarted.usecases().fetch_profile().execute().await.unwrap();
    profile_mock.assert_async().await;
    assert!(matches!(profile, UserProfile::ServiceProvider(ref p) if p.last_name == "Fixit"));

    restarted.usecases().logout().execute().await.unwrap();
    assert_eq!(
        app.usecases().resolve_start_route().execute().await,
        Route::Login
    );

    assert_eq!(
        ui.routes.lock().unwrap().clone(),
        vec![Route::Home, Route::Home, Route::Login, Route::Login]
    );
    assert_eq!(
        ui.alerts.lock().unwrap().clone(),
        vec![Alert::new(
            "Logged out",
            "You have been successfully logged out."
        )]
    );
}

#[tokio::test]
async fn expired_token_shows_server_detail() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(200)
        .with_body(r#"{"access_token":"old","token_type":"bearer","role":"BUSINESS"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/profile")
        .with_status(401)
        .with_body(r#"{"detail":"Could not validate credentials"}"#)
        .create_async()
        .await;

    let root = tempfile::TempDir::new().unwrap();
    let ui = Arc::new(RecordingUi::default());
    let app = app_for(&server, root.path(), ui.clone());

    let form = nx_core::LoginForm::new()
        .with_username("acme")
        .with_password("Passw0rd");
    app.usecases().submit_login().execute(form).await.unwrap();

    assert!(app.usecases().fetch_profile().execute().await.is_err());
    assert_eq!(
        ui.alerts.lock().unwrap().clone(),
        vec![Alert::new(
            "Profile fetch failed.",
            "Could not validate credentials"
        )]
    );
}
