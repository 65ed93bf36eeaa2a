use std::sync::Arc;

use chat_analyzer::analysis_result::ResultShape;
use chat_analyzer::server::{build_router, AppState};

pub mod api_tests;
pub mod gateway_tests;

use mock_gateway::ScriptedGateway;

/// two-line chat between Alice and Bob
pub const ALICE_AND_BOB: &str =
    "[01.02.2023, 10:00:00] Alice: hi\n[01.02.2023, 10:00:05] Bob: hey";

/// a well-formed dual-person hogwarts answer
pub const HOGWARTS_REPLY: &str = r#"{"name_person_1":"Alice","name_person_2":"Bob","house_1":"Gryffindor","house_2":"Ravenclaw","analysis_1":"...","analysis_2":"...","key_traits_1":["brave"],"key_traits_2":["witty"]}"#;

/// router wired to a scripted gateway, as the server builds it
pub fn test_app(gateway: Arc<ScriptedGateway>, shape: ResultShape) -> axum::Router {
    let state = Arc::new(AppState::new(gateway, shape));
    build_router(state)
}
