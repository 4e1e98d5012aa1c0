use serde::Serialize;

#[derive(Serialize)]
pub struct GymCreatedResponse {
    pub gym_id: String,
    pub admin_username: String,
    pub admin_secret: String,
}
