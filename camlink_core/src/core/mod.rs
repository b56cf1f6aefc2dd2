pub mod session_manager;
