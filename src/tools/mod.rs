pub mod dispatch;
pub mod endpoints;
pub mod registry;
pub mod tool_router;
