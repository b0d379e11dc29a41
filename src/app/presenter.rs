use crate::core::menu::{MenuChoice, EXIT_MESSAGE, MENU};
use crate::domain::model::Student;
use crate::utils::error::{RegistryError, Result};
use std::io::{BufRead, ErrorKind, Write};

pub const DEFAULT_SEPARATOR_WIDTH: usize = 50;
pub const INVALID_CHOICE_MESSAGE: &str = "Please, choose only 1, 2, 3, or 4";

/// 呈現層：只負責輸入輸出與轉換，不知道資料存在哪裡
pub struct Presenter<R: BufRead, W: Write> {
    input: R,
    output: W,
    separator_width: usize,
}

impl<R: BufRead, W: Write> Presenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }

    pub fn with_separator_width(mut self, width: usize) -> Self {
        self.separator_width = width;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn render_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", MENU)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// 讀不到輸入（EOF）時視為離開，避免無限重複顯示選單
    pub fn read_menu_choice(&mut self) -> Result<MenuChoice> {
        let line = match self.prompt("Enter your menu choice number: ") {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::debug!("End of input at menu prompt, exiting");
                writeln!(self.output)?;
                return Ok(MenuChoice::Exit);
            }
            // 無法解碼的一行已被讀掉，當成不合法的選項重新顯示選單
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Unreadable menu input: {}", e);
                String::new()
            }
            Err(e) => return Err(e),
        };

        let choice = MenuChoice::parse(&line);
        if !choice.is_valid() {
            // 不附技術訊息
            self.render_error(INVALID_CHOICE_MESSAGE, None)?;
        }
        Ok(choice)
    }

    /// 讀入一筆新的選課資料；驗證失敗時回報錯誤並丟棄，清單不變
    pub fn read_registration(&mut self, students: &mut Vec<Student>) -> Result<()> {
        match self.read_student() {
            Ok(student) => {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "You have registered {} {} for {}.",
                    student.first_name(),
                    student.last_name(),
                    student.course_name()
                )?;
                tracing::debug!("Registered {}", student);
                students.push(student);
            }
            Err(e) if e.is_recoverable() => {
                tracing::debug!("Registration rejected: {}", e);
                self.render_error(&e.user_friendly_message(), Some(&e))?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    pub fn render_students(&mut self, students: &[Student]) -> Result<()> {
        let separator = "-".repeat(self.separator_width);
        writeln!(self.output, "{}", separator)?;
        for student in students {
            writeln!(self.output, "{}", student.enrollment_line())?;
        }
        writeln!(self.output, "{}", separator)?;
        Ok(())
    }

    /// 先輸出友善訊息；有底層原因時再附上技術細節
    pub fn render_error(&mut self, message: &str, cause: Option<&RegistryError>) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        writeln!(self.output)?;
        if let Some(cause) = cause {
            let category = cause.category();
            writeln!(self.output, "-- Technical Error Message -- ")?;
            writeln!(self.output, "{}", cause)?;
            writeln!(self.output, "{}", category.description())?;
            writeln!(self.output, "{}", category)?;
        }
        Ok(())
    }

    pub fn render_notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn render_farewell(&mut self) -> Result<()> {
        writeln!(self.output, "{}", EXIT_MESSAGE)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_student(&mut self) -> Result<Student> {
        let first_name = self.required_prompt("Enter the student's first name: ")?;
        let last_name = self.required_prompt("Enter the student's last name: ")?;
        let course_name = self.required_prompt("Please enter the name of the course: ")?;
        Student::new(&first_name, &last_name, &course_name)
    }

    fn required_prompt(&mut self, prompt: &str) -> Result<String> {
        self.prompt(prompt)?.ok_or_else(|| RegistryError::InvalidInput {
            message: "input ended before the registration was complete".to_string(),
        })
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| match e.kind() {
            ErrorKind::InvalidData => RegistryError::InvalidInput {
                message: format!("input line could not be decoded: {}", e),
            },
            _ => RegistryError::IoError(e),
        })?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn presenter(input: &str) -> Presenter<Cursor<Vec<u8>>, Vec<u8>> {
        Presenter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(presenter: Presenter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(presenter.into_output()).unwrap()
    }

    #[test]
    fn test_render_menu_has_four_options() {
        let mut p = presenter("");
        p.render_menu().unwrap();
        let out = output_of(p);

        assert!(out.starts_with("\n\n---- Course Registration Program ----"));
        assert!(out.contains("1. Register a Student for a Course."));
        assert!(out.contains("2. Show current data."));
        assert!(out.contains("3. Save data to a file."));
        assert!(out.contains("4. Exit the program."));
        assert!(out.ends_with("\n\n\n"));
    }

    #[test]
    fn test_invalid_menu_choice_reports_error() {
        let mut p = presenter("9\n");
        let choice = p.read_menu_choice().unwrap();
        assert_eq!(choice, MenuChoice::Invalid("9".to_string()));

        let out = output_of(p);
        assert!(out.contains(INVALID_CHOICE_MESSAGE));
        assert!(!out.contains("Technical Error Message"));
    }

    #[test]
    fn test_undecodable_menu_line_is_invalid_choice() {
        let input = Cursor::new(vec![0xff, 0xfe, b'\n', b'2', b'\n']);
        let mut p = Presenter::new(input, Vec::new());
        assert_eq!(p.read_menu_choice().unwrap(), MenuChoice::Invalid(String::new()));
        assert_eq!(p.read_menu_choice().unwrap(), MenuChoice::Show);
        assert!(output_of(p).contains(INVALID_CHOICE_MESSAGE));
    }

    #[test]
    fn test_undecodable_registration_line_is_discarded() {
        let mut p = Presenter::new(Cursor::new(vec![0xc3, 0x28, b'\n']), Vec::new());
        let mut students = Vec::new();
        p.read_registration(&mut students).unwrap();

        assert!(students.is_empty());
        let out = output_of(p);
        assert!(out.contains("Error: There was a problem with your entered data."));
        assert!(out.contains("InputError"));
    }

    #[test]
    fn test_menu_choice_eof_means_exit() {
        let mut p = presenter("");
        assert_eq!(p.read_menu_choice().unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_registration_success() {
        let mut p = presenter("wanda\nmaximoff\npython 100\n");
        let mut students = Vec::new();
        p.read_registration(&mut students).unwrap();

        assert_eq!(students.len(), 1);
        assert_eq!(
            students[0].enrollment_line(),
            "Wanda Maximoff is enrolled in Python 100."
        );
        assert!(output_of(p).contains("You have registered Wanda Maximoff for Python 100."));
    }

    #[test]
    fn test_registration_validation_failure_keeps_list() {
        let mut p = presenter("Tony\n5tark\nIntro Robotics\n");
        let mut students = vec![Student::new("Wanda", "Maximoff", "Python 100").unwrap()];
        p.read_registration(&mut students).unwrap();

        assert_eq!(students.len(), 1);
        let out = output_of(p);
        assert!(out.contains("One of the values was the incorrect type of data!"));
        assert!(out.contains("-- Technical Error Message -- "));
        assert!(out.contains("last name may only contain alphabetic characters."));
        assert!(out.contains("ValidationError"));
    }

    #[test]
    fn test_registration_truncated_input() {
        let mut p = presenter("Wanda\n");
        let mut students = Vec::new();
        p.read_registration(&mut students).unwrap();

        assert!(students.is_empty());
        assert!(output_of(p).contains("Error: There was a problem with your entered data."));
    }

    #[test]
    fn test_render_students_between_separators() {
        let mut p = presenter("").with_separator_width(10);
        let students = vec![
            Student::new("wanda", "maximoff", "python 100").unwrap(),
            Student::new("vision", "synth", "intro robotics").unwrap(),
        ];
        p.render_students(&students).unwrap();

        assert_eq!(
            output_of(p),
            "----------\n\
             Wanda Maximoff is enrolled in Python 100.\n\
             Vision Synth is enrolled in Intro Robotics.\n\
             ----------\n"
        );
    }
}
