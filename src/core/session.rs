use crate::app::Presenter;
use crate::core::menu::{MenuChoice, SessionState};
use crate::domain::model::Student;
use crate::domain::ports::EnrollmentStore;
use crate::utils::error::{RegistryError, Result};
use std::io::{BufRead, Write};

/// 控制迴圈：唯一持有記憶體中的選課清單，並以參照交給呈現層與儲存層
pub struct RegistrationSession<S: EnrollmentStore, R: BufRead, W: Write> {
    store: S,
    presenter: Presenter<R, W>,
    students: Vec<Student>,
    state: SessionState,
}

impl<S: EnrollmentStore, R: BufRead, W: Write> RegistrationSession<S, R, W> {
    pub fn new(store: S, presenter: Presenter<R, W>) -> Self {
        Self {
            store,
            presenter,
            students: Vec::new(),
            state: SessionState::Loading,
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn into_parts(self) -> (Vec<Student>, Presenter<R, W>) {
        (self.students, self.presenter)
    }

    /// 載入一次後進入選單迴圈，直到使用者選擇離開
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Starting course registration session");

        self.load()?;
        self.state = self.state.next(None);

        while !self.state.is_terminal() {
            self.presenter.render_menu()?;
            let choice = self.presenter.read_menu_choice()?;
            self.state = self.state.next(Some(&choice));
            tracing::debug!("Menu choice {:?} -> {}", choice, self.state);

            match self.state {
                SessionState::Registering => {
                    self.presenter.read_registration(&mut self.students)?
                }
                SessionState::Displaying => self.presenter.render_students(&self.students)?,
                SessionState::Saving => self.save()?,
                SessionState::Menu | SessionState::Exiting | SessionState::Loading => {}
            }

            if !self.state.is_terminal() {
                self.state = self.state.next(None);
            }
        }

        self.presenter.render_farewell()?;
        tracing::info!("Session finished with {} enrollments in memory", self.students.len());
        Ok(())
    }

    /// 載入失敗都可以復原：回報後以空清單繼續
    fn load(&mut self) -> Result<()> {
        match self.store.load() {
            Ok(roster) => {
                for rejected in &roster.rejected {
                    let message = format!(
                        "Error: Row {} in {} was skipped because it is not a valid enrollment.",
                        rejected.position,
                        self.store.location()
                    );
                    self.presenter.render_error(&message, Some(&rejected.error))?;
                }
                self.students = roster.students;
            }
            Err(e) => {
                tracing::warn!("Loading {} failed: {}", self.store.location(), e);
                self.presenter.render_error(&e.user_friendly_message(), Some(&e))?;
                if matches!(e, RegistryError::FileNotFound { .. }) {
                    self.presenter.render_notice("Creating the file...")?;
                }
                self.students = Vec::new();
            }
        }
        Ok(())
    }

    /// 寫入失敗時記憶體中的清單保持不變
    fn save(&mut self) -> Result<()> {
        match self.store.save(&self.students) {
            Ok(()) => self.presenter.render_students(&self.students),
            Err(e) => {
                tracing::warn!("Saving {} failed: {}", self.store.location(), e);
                self.presenter.render_error(&e.user_friendly_message(), Some(&e))
            }
        }
    }
}
