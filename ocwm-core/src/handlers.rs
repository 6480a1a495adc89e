mod animation_handler;
pub mod command_handler;
mod cursor_handler;
pub mod display_event_handler;
mod focus_handler;
mod key_handler;
mod layout_handler;
mod output_handler;
mod view_handler;
mod view_move_handler;
mod view_resize_handler;
mod workspace_handler;
