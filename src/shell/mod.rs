//! Console front end
//!
//! A text menu offering Register Visitor, Check-in, Pre-Approve, Check-out and
//! Exit. The menu works over any `BufRead`/`Write` pair so sessions can be
//! scripted.
//!
//! # Usage Example
//!
//! ```rust
//! use std::io::Cursor;
//! use visitor_pass_manager::service::FrontDesk;
//! use visitor_pass_manager::shell::MainMenu;
//! use visitor_pass_manager::types::AppConfig;
//!
//! let mut desk = FrontDesk::new(&AppConfig::default());
//! let script = "1\nBob\nInterview\nAlice\nAcme\n555-0100\n5\n";
//!
//! let mut menu = MainMenu::new(&mut desk, Cursor::new(script), Vec::new());
//! menu.run().unwrap();
//!
//! let output = String::from_utf8(menu.into_output()).unwrap();
//! assert!(output.contains("Visitor registered with ePass: EPASS-"));
//! ```

pub mod menu;
pub mod messages;

pub use menu::MainMenu;
