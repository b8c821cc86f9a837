use axum::http::StatusCode;

// 上流 API には問い合わせず、プロセスが応答できるかだけを返す
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
