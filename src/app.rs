// App state and main menu loop.
// Reads menu choices line by line and dispatches them to the lookup service.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::lookup::{Fetched, LookupService, UserSource};
use crate::ui;

/// Action offered by the program menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    FetchUser,
    ListCachedUsers,
    SearchCachedUser,
    SearchRepositories,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::FetchUser,
        MenuAction::ListCachedUsers,
        MenuAction::SearchCachedUser,
        MenuAction::SearchRepositories,
        MenuAction::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuAction::FetchUser => 1,
            MenuAction::ListCachedUsers => 2,
            MenuAction::SearchCachedUser => 3,
            MenuAction::SearchRepositories => 4,
            MenuAction::Exit => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuAction::FetchUser => "Fetch user information by username",
            MenuAction::ListCachedUsers => "Display list of cached users",
            MenuAction::SearchCachedUser => "Search for a user in cache by username",
            MenuAction::SearchRepositories => "Search repositories in cache by repository name",
            MenuAction::Exit => "Exit the program",
        }
    }

    /// Parse a menu choice such as `"3"`.
    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|action| action.number() == number)
    }
}

/// Main application state.
pub struct App<S, R, W> {
    lookup: LookupService<S>,
    input: R,
    output: W,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl<S: UserSource, R: BufRead, W: Write> App<S, R, W> {
    pub fn new(lookup: LookupService<S>, input: R, output: W) -> Self {
        Self {
            lookup,
            input,
            output,
            should_quit: false,
        }
    }

    pub fn lookup(&self) -> &LookupService<S> {
        &self.lookup
    }

    /// Main menu loop. Returns when the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            ui::draw_menu(&mut self.output)?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            match MenuAction::parse(&choice) {
                Some(action) => self.handle_action(action)?,
                None => ui::error(&mut self.output, "Invalid option. Please try again.")?,
            }
        }
        Ok(())
    }

    /// Dispatch one menu action.
    pub fn handle_action(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::FetchUser => self.fetch_user(),
            MenuAction::ListCachedUsers => self.list_cached_users(),
            MenuAction::SearchCachedUser => self.search_cached_user(),
            MenuAction::SearchRepositories => self.search_repositories(),
            MenuAction::Exit => {
                ui::heading(&mut self.output, "Exiting the program...")?;
                self.should_quit = true;
                Ok(())
            }
        }
    }

    fn fetch_user(&mut self) -> Result<()> {
        let Some(username) = self.prompt(" Enter username: ")? else {
            return Ok(());
        };

        let user = match self.lookup.fetch_user(&username) {
            Err(e @ Error::InvalidUsername(_)) => {
                ui::error(&mut self.output, &e.to_string())?;
                return Ok(());
            }
            result => result,
        };
        self.report(&user, "Data", "Error fetching user data")?;

        let repos = self.lookup.fetch_user_repositories(&username);
        self.report(&repos, "Repositories", "Error fetching repositories")?;

        if let Ok(user) = user {
            ui::heading(&mut self.output, "User Information:")?;
            ui::write_user(&mut self.output, &user.value)?;
            if let Ok(repos) = repos {
                ui::write_repositories(&mut self.output, &repos.value)?;
            }
        }
        Ok(())
    }

    fn list_cached_users(&mut self) -> Result<()> {
        ui::heading(&mut self.output, "Cached Users:")?;
        let users = self.lookup.cached_users();
        if users.is_empty() {
            ui::error(&mut self.output, "No users cached yet.")?;
        }
        for user in users {
            writeln!(self.output, "  {}", user.login)?;
        }
        Ok(())
    }

    fn search_cached_user(&mut self) -> Result<()> {
        let Some(username) = self.prompt(" Enter username to search: ")? else {
            return Ok(());
        };

        let entry = match self.lookup.cached_user_entry(&username) {
            Ok(entry) => entry,
            Err(e) => return ui::error(&mut self.output, &e.to_string()).map_err(Error::from),
        };
        let Some(entry) = entry else {
            return ui::error(&mut self.output, "User not found in cache.").map_err(Error::from);
        };

        ui::write_user(&mut self.output, &entry.data)?;
        ui::success(
            &mut self.output,
            &format!("Cached {}", ui::format_relative_time(&entry.cached_at)),
        )?;
        if let Some(repos) = self.lookup.cached_repositories(&username)? {
            ui::write_repositories(&mut self.output, repos)?;
        }
        Ok(())
    }

    fn search_repositories(&mut self) -> Result<()> {
        let Some(name) = self.prompt(" Enter repository name to search: ")? else {
            return Ok(());
        };

        let found = self.lookup.search_repositories_by_name(&name);
        if found.is_empty() {
            ui::error(&mut self.output, "No repositories found.")?;
        } else {
            ui::heading(&mut self.output, "Found Repositories:")?;
            ui::write_matches(&mut self.output, &found)?;
        }
        Ok(())
    }

    /// Print a notice for a fetch result: where it came from, or why it failed.
    fn report<T>(&mut self, result: &Result<Fetched<T>>, what: &str, failure: &str) -> Result<()> {
        match result {
            Ok(fetched) if fetched.is_cache_hit() => {
                ui::success(&mut self.output, &format!("{} retrieved from cache!", what))?
            }
            Ok(_) => ui::success(
                &mut self.output,
                &format!("{} retrieved from API and cached.", what),
            )?,
            Err(e) => ui::error(&mut self.output, &format!("{}: {}", failure, e))?,
        }
        Ok(())
    }

    /// Prompt for a line of input. `None` means input ended; the app then quits.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        ui::prompt(&mut self.output, text)?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.should_quit = true;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
