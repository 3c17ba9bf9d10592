//! Route table
//!
//! Maps the three client paths to screens. Unknown paths redirect to the
//! accounts list.

use std::fmt;

/// A client-side route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Accounts,
    /// `/create`
    CreateAccount,
    /// `/transaction`
    Transaction,
}

impl Route {
    /// All routes in navbar order
    pub const ALL: [Route; 3] = [Route::Accounts, Route::CreateAccount, Route::Transaction];

    /// Resolve a path; anything unmatched lands on `/`
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "/create" | "create" => Route::CreateAccount,
            "/transaction" | "transaction" => Route::Transaction,
            _ => Route::Accounts,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Accounts => "/",
            Route::CreateAccount => "/create",
            Route::Transaction => "/transaction",
        }
    }

    /// Navbar label
    pub fn title(self) -> &'static str {
        match self {
            Route::Accounts => "Accounts",
            Route::CreateAccount => "Create Account",
            Route::Transaction => "Send Transaction",
        }
    }

    /// Navbar shortcut key
    pub fn shortcut(self) -> char {
        match self {
            Route::Accounts => '1',
            Route::CreateAccount => '2',
            Route::Transaction => '3',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.shortcut() == c)
    }

    pub fn next(self) -> Self {
        match self {
            Route::Accounts => Route::CreateAccount,
            Route::CreateAccount => Route::Transaction,
            Route::Transaction => Route::Accounts,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Route::Accounts => Route::Transaction,
            Route::CreateAccount => Route::Accounts,
            Route::Transaction => Route::CreateAccount,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
