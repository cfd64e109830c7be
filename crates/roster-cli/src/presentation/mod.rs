//! # Presentation Layer
//!
//! User interface logic for the CLI, built on an adaptation of the
//! **MVVM (Model-View-ViewModel)** pattern.
//!
//! ## Data Flow
//!
//! ### Subcommands (Text/JSON):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json --> stdout
//!  (Controller)     (Converter)        (Data)             (Driver)        ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ### Interactive TUI:
//!
//! ```text
//! [ Coordinator ] --snapshot--> [ present_screen ] --> [ ScreenViewModel ] --> [ TuiRenderer ] --> [ Widgets ]
//!        ^                                                                          |
//!        +------------------------- spawned actions <------------------ key events -+
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels are data.** They implement `Serialize`; `--format json`
//!    prints them whole. Display strings for money and dates are computed
//!    once by presenters so every frontend shows the same text.
//! 2. **Presenters are pure.** Same records in, same view model out. No I/O.
//! 3. **Views only lay out.** `fmt::Display` for the console, ratatui
//!    `Widget` for the TUI. Colors live here.
//! 4. **UI state stays in the renderer.** Focus, selection and open modals
//!    never go into a view model. Selections are clamped against the data
//!    before every frame.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Compute the average salary | `presenters/` |
//! | Format `50000` as `$50,000.00` | `formatters/` |
//! | Change a column width or color | `views/` |
//! | Bind a key in the TUI | `renderers/tui.rs` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
