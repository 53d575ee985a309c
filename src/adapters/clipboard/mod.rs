pub mod system_clipboard;
