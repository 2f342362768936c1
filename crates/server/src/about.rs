use api_types::about::TeamMember;
use axum::Json;

pub async fn get() -> Json<Vec<TeamMember>> {
    let members = engine::team_members()
        .iter()
        .map(|member| TeamMember {
            first_name: member.first_name.to_string(),
            last_name: member.last_name.to_string(),
        })
        .collect();
    Json(members)
}
