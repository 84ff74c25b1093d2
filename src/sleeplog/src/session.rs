use std::fmt::Display;

use sleeplog_db::{AccountError, DatabaseHandler, User};
use thiserror::Error;

use crate::Dashboard;

/// The screen a session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Signup,
    Dashboard,
}

impl Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Page::Login => "login",
            Page::Signup => "sign up",
            Page::Dashboard => "dashboard",
        })
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not logged in")]
    NotLoggedIn,
    #[error("can not {action} from the {page} page")]
    WrongPage { page: Page, action: &'static str },
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Current page and logged in user, passed explicitly to every operation
/// that needs them.
#[derive(Debug, Default)]
pub struct Session {
    page: Page,
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn go_to_signup(&mut self) -> Result<(), SessionError> {
        self.expect_page(Page::Login, "open sign up")?;
        self.page = Page::Signup;
        Ok(())
    }

    pub fn go_to_login(&mut self) -> Result<(), SessionError> {
        self.expect_page(Page::Signup, "go back to login")?;
        self.page = Page::Login;
        Ok(())
    }

    /// A successful registration sends the user back to the login page.
    pub async fn sign_up(
        &mut self,
        db: &DatabaseHandler,
        username: &str,
        password: &str,
    ) -> Result<User, SessionError> {
        self.expect_page(Page::Signup, "sign up")?;

        let user = db.create_user(username, password).await?;
        self.page = Page::Login;
        Ok(user)
    }

    pub async fn log_in(
        &mut self,
        db: &DatabaseHandler,
        username: &str,
        password: &str,
    ) -> Result<&User, SessionError> {
        self.expect_page(Page::Login, "log in")?;

        let user = db.authenticate(username, password).await?;
        info!("`{}` logged in", user.username);

        self.page = Page::Dashboard;
        Ok(&*self.user.insert(user))
    }

    pub fn log_out(&mut self) {
        if let Some(user) = self.user.take() {
            debug!("`{}` logged out", user.username);
        }
        self.page = Page::Login;
    }

    pub fn dashboard<'a>(&'a self, db: &'a DatabaseHandler) -> Result<Dashboard<'a>, SessionError> {
        match (&self.page, &self.user) {
            (Page::Dashboard, Some(user)) => Ok(Dashboard::new(db, user)),
            _ => Err(SessionError::NotLoggedIn),
        }
    }

    fn expect_page(&self, page: Page, action: &'static str) -> Result<(), SessionError> {
        if self.page == page {
            Ok(())
        } else {
            Err(SessionError::WrongPage {
                page: self.page,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn db() -> DatabaseHandler {
        DatabaseHandler::new("sqlite::memory:").await.unwrap()
    }

    #[test]
    fn starts_on_login() {
        let session = Session::new();
        assert_eq!(session.page(), Page::Login);
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn full_flow() {
        let db = db().await;
        let mut session = Session::new();

        session.go_to_signup().unwrap();
        assert_eq!(session.page(), Page::Signup);

        let user = session.sign_up(&db, "alice", "pw").await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(session.page(), Page::Login);
        assert!(session.user().is_none());

        let logged_in = session.log_in(&db, "alice", "pw").await.unwrap();
        assert_eq!(logged_in.id, user.id);
        assert_eq!(session.page(), Page::Dashboard);
        assert!(session.dashboard(&db).is_ok());

        session.log_out();
        assert_eq!(session.page(), Page::Login);
        assert!(session.user().is_none());
        assert!(matches!(
            session.dashboard(&db),
            Err(SessionError::NotLoggedIn)
        ));
    }

    #[tokio::test]
    async fn failed_sign_up_stays_on_page() {
        let db = db().await;
        db.create_user("alice", "pw").await.unwrap();

        let mut session = Session::new();
        session.go_to_signup().unwrap();

        let result = session.sign_up(&db, "alice", "other").await;
        assert!(matches!(
            result,
            Err(SessionError::Account(AccountError::UsernameTaken(_)))
        ));
        assert_eq!(session.page(), Page::Signup);

        session.go_to_login().unwrap();
        assert_eq!(session.page(), Page::Login);
    }

    #[tokio::test]
    async fn failed_login_stays_on_page() {
        let db = db().await;
        db.create_user("alice", "pw").await.unwrap();

        let mut session = Session::new();
        let result = session.log_in(&db, "alice", "wrong").await;
        assert!(matches!(
            result,
            Err(SessionError::Account(AccountError::InvalidCredentials))
        ));
        assert_eq!(session.page(), Page::Login);
        assert!(session.dashboard(&db).is_err());
    }

    #[tokio::test]
    async fn transitions_are_checked() {
        let db = db().await;
        let mut session = Session::new();

        let result = session.sign_up(&db, "bob", "pw").await;
        assert!(matches!(
            result,
            Err(SessionError::WrongPage {
                page: Page::Login,
                action: "sign up"
            })
        ));
        assert!(session.go_to_login().is_err());

        db.create_user("bob", "pw").await.unwrap();
        session.log_in(&db, "bob", "pw").await.unwrap();
        assert!(session.go_to_signup().is_err());
        assert!(session.log_in(&db, "bob", "pw").await.is_err());
    }

    #[test]
    fn wrong_page_message() {
        let error = SessionError::WrongPage {
            page: Page::Dashboard,
            action: "log in",
        };
        assert_eq!(error.to_string(), "can not log in from the dashboard page");
    }
}
