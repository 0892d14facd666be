use axum_test::TestServer;
use status_server::{create_app, AppState, Config, PayloadVariant, StaticEnv};

pub fn setup_test_server(variant: PayloadVariant, env: StaticEnv) -> TestServer {
    let config = Config {
        variant,
        ..Config::default()
    };
    let app = create_app(AppState::with_env(config, env.into_shared()));
    TestServer::new(app).unwrap()
}

pub fn default_server() -> TestServer {
    setup_test_server(PayloadVariant::default(), StaticEnv::new())
}
