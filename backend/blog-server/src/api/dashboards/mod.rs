pub mod admin_dashboard_response;
pub mod dashboard_response;
pub mod dashboards;
