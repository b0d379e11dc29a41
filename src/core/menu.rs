use std::fmt;

pub const MENU: &str = "
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------
";

pub const EXIT_MESSAGE: &str = "

    ╔════════════════ « ♦ » ═══╗
          Closing program...
    ╚═══ « ♦ » ════════════════╝
";

/// 使用者在選單輸入的結果；不合法的輸入不是錯誤，而是明確的標記
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Show,
    Save,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    /// 只接受完全相同的 "1".."4"，只去掉換行字元
    pub fn parse(input: &str) -> Self {
        match input.trim_end_matches(['\r', '\n']) {
            "1" => MenuChoice::Register,
            "2" => MenuChoice::Show,
            "3" => MenuChoice::Save,
            "4" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, MenuChoice::Invalid(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Menu,
    Registering,
    Displaying,
    Saving,
    Exiting,
}

impl SessionState {
    /// Loading 之後進入 Menu；Menu 依選擇分派；其餘非終止狀態一律回到 Menu
    pub fn next(self, choice: Option<&MenuChoice>) -> SessionState {
        match (self, choice) {
            (SessionState::Loading, _) => SessionState::Menu,
            (SessionState::Menu, Some(MenuChoice::Register)) => SessionState::Registering,
            (SessionState::Menu, Some(MenuChoice::Show)) => SessionState::Displaying,
            (SessionState::Menu, Some(MenuChoice::Save)) => SessionState::Saving,
            (SessionState::Menu, Some(MenuChoice::Exit)) => SessionState::Exiting,
            (SessionState::Menu, _) => SessionState::Menu,
            (SessionState::Exiting, _) => SessionState::Exiting,
            (SessionState::Registering | SessionState::Displaying | SessionState::Saving, _) => {
                SessionState::Menu
            }
        }
    }

    pub fn is_terminal(self) -> bool {
        self == SessionState::Exiting
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Loading => "loading",
            SessionState::Menu => "menu",
            SessionState::Registering => "registering",
            SessionState::Displaying => "displaying",
            SessionState::Saving => "saving",
            SessionState::Exiting => "exiting",
        };
        f.write_str(name)
    }
}
