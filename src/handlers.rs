pub mod home;
pub mod pagination;

pub async fn health() -> &'static str {
    "OK"
}
