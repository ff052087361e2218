//! Inter-Hostel Team Builder - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading PDF rosters, reviewing the
//! extracted participant lists and generating balanced teams. Parsing,
//! OCR and team balancing all happen on the backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── FileInputs (A, B, C)                                    │
//! │  ├── ParsePanel (separate / single PDF)                      │
//! │  ├── CategoryEditors                                         │
//! │  ├── OptionsPanel (generate)                                 │
//! │  └── TeamsPanel + QuickStats                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Categories, GenerateOptions, AppError, etc.)
//! - [`roster`] - Name list and option input parsing
//! - [`export`] - CSV and clipboard rendering of teams
//! - [`components`] - UI components
//! - [`services`] - Backend calls and browser side effects

use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod roster;
pub mod export;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Roster
    Categories, Category, RosterFiles,
    // Options
    GenerateOptions, TwoCategoryStrategy,
    // API
    GenerateMeta, GenerateRequest, GenerateResponse, ParseResponse,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application, discarded on reload
    let (files, set_files) = create_signal(RosterFiles::default());
    let (categories, set_categories) = create_signal(Categories::default());
    let (parsing, set_parsing) = create_signal(false);
    let (message, set_message) = create_signal(None::<String>);
    let (teams, set_teams) = create_signal(Vec::<Vec<String>>::new());
    let (options, set_options) = create_signal(GenerateOptions::default());

    let total = create_memo(move |_| categories.with(Categories::total));

    view! {
        <div class="container">
            <Header/>

            <FileInputs set_files=set_files/>

            <ParsePanel
                files=files
                set_files=set_files
                set_categories=set_categories
                parsing=parsing
                set_parsing=set_parsing
                set_message=set_message
                total=total
            />

            <CategoryEditors categories=categories set_categories=set_categories/>

            <OptionsPanel
                categories=categories
                options=options
                set_options=set_options
                set_teams=set_teams
                set_message=set_message
            />

            <section class="grid grid-results mb-6">
                <TeamsPanel
                    teams=teams
                    set_teams=set_teams
                    options=options
                    message=message
                    set_message=set_message
                />
                <QuickStats categories=categories total=total/>
            </section>

            <Footer/>
        </div>
    }
}
