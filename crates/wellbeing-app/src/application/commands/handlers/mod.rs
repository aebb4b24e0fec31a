mod login_handler;
mod register_user_handler;
mod save_checklist_handler;

#[cfg(test)]
mod tests;

pub use login_handler::LoginCommandHandler;
pub use register_user_handler::RegisterUserCommandHandler;
pub use save_checklist_handler::SaveChecklistCommandHandler;
