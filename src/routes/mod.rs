pub mod page_routes;
pub mod quote_routes;
pub mod vehicle_routes;
