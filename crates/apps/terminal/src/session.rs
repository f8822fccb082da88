//! Terminal session state: working directory, transcript, command history, and Tab completion.
//!
//! Everything here is plain data driven by [`TerminalSession::submit`],
//! [`TerminalSession::complete`], and the history cursor methods, so the view only renders.

use platform_host::{
    join_virtual_path, FsLookupError, LocalClock, MockFilesystem, HOME_DIR_PATH,
};

use crate::command::{
    ping_text, Command, CommandError, BANNER, CREDITS_TEXT, EXIT_HINT, HELP_TEXT, IFCONFIG_TEXT,
    PS_TEXT, SYSTEM_NAME, USER_NAME,
};

const MAX_TRANSCRIPT_ENTRIES: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered transcript line group.
pub enum TranscriptEntry {
    /// Echo of a submitted line with the directory it ran in.
    Prompt {
        /// Working directory at submit time.
        cwd: String,
        /// Line as typed.
        line: String,
    },
    /// Command output or error text.
    Output(String),
}

#[derive(Debug, Clone)]
/// Interactive shell state over a read-only mock filesystem.
pub struct TerminalSession {
    fs: MockFilesystem,
    cwd: String,
    transcript: Vec<TranscriptEntry>,
    history: Vec<String>,
    history_cursor: Option<usize>,
}

impl TerminalSession {
    /// Starts a session in the home directory with the welcome banner.
    pub fn new(fs: MockFilesystem) -> Self {
        Self {
            fs,
            cwd: HOME_DIR_PATH.to_string(),
            transcript: BANNER
                .iter()
                .map(|line| TranscriptEntry::Output((*line).to_string()))
                .collect(),
            history: Vec::new(),
            history_cursor: None,
        }
    }

    /// Current working directory.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Rendered transcript, oldest first.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Submitted lines, newest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Runs one input line. Blank lines are ignored and return `false`.
    pub fn submit(&mut self, line: &str, now: &LocalClock) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        self.push(TranscriptEntry::Prompt {
            cwd: self.cwd.clone(),
            line: line.to_string(),
        });
        self.history.insert(0, line.to_string());
        self.history_cursor = None;

        match self.run(line, now) {
            Ok(Some(output)) if !output.is_empty() => self.push(TranscriptEntry::Output(output)),
            Ok(_) => {}
            Err(err) => self.push(TranscriptEntry::Output(err.to_string())),
        }
        true
    }

    fn run(&mut self, line: &str, now: &LocalClock) -> Result<Option<String>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let command = Command::parse(name).ok_or_else(|| CommandError::NotFound(name.to_string()))?;

        let output = match command {
            Command::Help => HELP_TEXT.to_string(),
            Command::Credits => CREDITS_TEXT.to_string(),
            Command::Clear => {
                self.transcript.clear();
                return Ok(None);
            }
            Command::Echo => args.join(" "),
            Command::Date => format!("{} {}", now.long_date(), now.hh_mm_ss()),
            Command::Ls => self.list(args.first().copied())?,
            Command::Cd => {
                self.change_directory(args.first().copied())?;
                return Ok(None);
            }
            Command::Pwd => self.cwd.clone(),
            Command::Cat => {
                let target = args.first().ok_or(CommandError::MissingFileOperand)?;
                let path = join_virtual_path(&self.cwd, target);
                match self.fs.read_file(&path) {
                    Ok(content) => content.to_string(),
                    Err(reason) => return Err(CommandError::Read { path, reason }),
                }
            }
            Command::Whoami => USER_NAME.to_string(),
            Command::Uname => SYSTEM_NAME.to_string(),
            Command::History => self
                .history
                .iter()
                .enumerate()
                .map(|(index, entry)| format!("{}  {entry}", index + 1))
                .collect::<Vec<_>>()
                .join("\n"),
            Command::Ps => PS_TEXT.to_string(),
            Command::Ifconfig => IFCONFIG_TEXT.to_string(),
            Command::Ping => ping_text(args.first().ok_or(CommandError::MissingHostOperand)?),
            Command::Exit => EXIT_HINT.to_string(),
        };
        Ok(Some(output))
    }

    fn list(&self, target: Option<&str>) -> Result<String, CommandError> {
        let path = target.map_or_else(|| self.cwd.clone(), |t| join_virtual_path(&self.cwd, t));
        match self.fs.list_dir(&path) {
            Ok(entries) => Ok(entries
                .iter()
                .map(|entry| {
                    if entry.is_directory() {
                        format!("{}/", entry.name)
                    } else {
                        entry.name.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")),
            Err(FsLookupError::NotADirectory) => Ok(target.unwrap_or(&path).to_string()),
            Err(_) => Err(CommandError::ListMissing(path)),
        }
    }

    fn change_directory(&mut self, target: Option<&str>) -> Result<(), CommandError> {
        let path = match target {
            None | Some("~") => HOME_DIR_PATH.to_string(),
            Some(target) => join_virtual_path(&self.cwd, target),
        };
        self.fs
            .list_dir(&path)
            .map_err(|reason| CommandError::ChangeDirectory {
                path: path.clone(),
                reason,
            })?;
        self.cwd = path;
        Ok(())
    }

    /// Steps the history cursor toward older lines and returns the recalled line.
    pub fn history_older(&mut self) -> Option<String> {
        let next = self.history_cursor.map_or(0, |index| index + 1);
        let line = self.history.get(next)?.clone();
        self.history_cursor = Some(next);
        Some(line)
    }

    /// Steps toward newer lines; stepping past the newest returns an empty input.
    pub fn history_newer(&mut self) -> Option<String> {
        match self.history_cursor? {
            0 => {
                self.history_cursor = None;
                Some(String::new())
            }
            index => {
                self.history_cursor = Some(index - 1);
                self.history.get(index - 1).cloned()
            }
        }
    }

    /// Tab completion. Returns the replacement input on a unique match; several matches are
    /// listed in the transcript and the input is left alone.
    pub fn complete(&mut self, line: &str) -> Option<String> {
        let args: Vec<&str> = line.trim().split(' ').collect();
        match args.as_slice() {
            [word] => {
                let prefix = word.to_lowercase();
                let matches: Vec<String> = Command::ALL
                    .iter()
                    .map(|command| command.name())
                    .filter(|name| name.starts_with(&prefix))
                    .map(str::to_string)
                    .collect();
                self.resolve_candidates(line, matches, |name| name)
            }
            [name, .., last] if Command::parse(name).is_some_and(Command::takes_path) => {
                let (dir_part, prefix) = match last.rfind('/') {
                    Some(idx) => last.split_at(idx + 1),
                    None => ("", *last),
                };
                let search_dir = if dir_part.is_empty() {
                    self.cwd.clone()
                } else {
                    join_virtual_path(&self.cwd, dir_part)
                };
                let matches: Vec<String> = self
                    .fs
                    .list_dir(&search_dir)
                    .unwrap_or(&[])
                    .iter()
                    .filter(|entry| entry.name.starts_with(prefix))
                    .map(|entry| {
                        if entry.is_directory() {
                            format!("{}/", entry.name)
                        } else {
                            entry.name.clone()
                        }
                    })
                    .collect();
                let head = &args[..args.len() - 1];
                self.resolve_candidates(line, matches, |completed| {
                    let mut words: Vec<String> = head.iter().map(|w| w.to_string()).collect();
                    words.push(format!("{dir_part}{completed}"));
                    words.join(" ")
                })
            }
            _ => None,
        }
    }

    fn resolve_candidates(
        &mut self,
        line: &str,
        matches: Vec<String>,
        replace: impl FnOnce(String) -> String,
    ) -> Option<String> {
        match matches.len() {
            0 => None,
            1 => matches.into_iter().next().map(replace),
            _ => {
                let listing = matches
                    .iter()
                    .map(|name| name.trim_end_matches('/'))
                    .collect::<Vec<_>>()
                    .join("  ");
                self.push(TranscriptEntry::Prompt {
                    cwd: self.cwd.clone(),
                    line: line.to_string(),
                });
                self.push(TranscriptEntry::Output(listing));
                None
            }
        }
    }

    fn push(&mut self, entry: TranscriptEntry) {
        self.transcript.push(entry);
        if self.transcript.len() > MAX_TRANSCRIPT_ENTRIES {
            let overflow = self.transcript.len() - MAX_TRANSCRIPT_ENTRIES;
            self.transcript.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use platform_host::default_filesystem;
    use pretty_assertions::assert_eq;

    use super::*;

    fn clock() -> LocalClock {
        LocalClock {
            year: 2023,
            month: 4,
            day: 17,
            weekday: 1,
            hour: 9,
            minute: 5,
            second: 7,
        }
    }

    fn session() -> TerminalSession {
        TerminalSession::new(default_filesystem())
    }

    fn run(session: &mut TerminalSession, line: &str) -> Option<String> {
        session.submit(line, &clock());
        match session.transcript().last() {
            Some(TranscriptEntry::Output(text)) => Some(text.clone()),
            _ => None,
        }
    }

    #[test]
    fn starts_at_home_with_banner() {
        let session = session();
        assert_eq!(session.cwd(), "/home/user");
        assert_eq!(
            session.transcript(),
            &[
                TranscriptEntry::Output("WebOS Terminal v1.0.0".to_string()),
                TranscriptEntry::Output("Type 'help' to see available commands".to_string()),
            ]
        );
    }

    #[test]
    fn blank_lines_are_not_recorded() {
        let mut session = session();
        assert!(!session.submit("   ", &clock()));
        assert_eq!(session.transcript().len(), 2);
        assert!(session.history().is_empty());
    }

    #[test]
    fn cd_and_pwd_follow_relative_absolute_and_home_targets() {
        let mut session = session();
        run(&mut session, "cd Documents");
        assert_eq!(session.cwd(), "/home/user/Documents");
        run(&mut session, "cd ..");
        assert_eq!(session.cwd(), "/home/user");
        run(&mut session, "cd /etc");
        assert_eq!(run(&mut session, "pwd").as_deref(), Some("/etc"));
        run(&mut session, "cd ~");
        assert_eq!(session.cwd(), "/home/user");
        run(&mut session, "cd /");
        run(&mut session, "cd");
        assert_eq!(session.cwd(), "/home/user");
    }

    #[test]
    fn cd_reports_missing_and_file_targets_without_moving() {
        let mut session = session();
        assert_eq!(
            run(&mut session, "cd nowhere").as_deref(),
            Some("cd: /home/user/nowhere: No such file or directory")
        );
        assert_eq!(
            run(&mut session, "cd /etc/hosts").as_deref(),
            Some("cd: /etc/hosts: Not a directory")
        );
        assert_eq!(session.cwd(), "/home/user");
    }

    #[test]
    fn ls_marks_directories_and_reports_missing_paths() {
        let mut session = session();
        assert_eq!(run(&mut session, "ls /usr").as_deref(), Some("bin/  lib/"));
        assert_eq!(
            run(&mut session, "ls missing").as_deref(),
            Some("ls: cannot access '/home/user/missing': No such file or directory")
        );
        assert_eq!(run(&mut session, "ls /etc/hosts").as_deref(), Some("/etc/hosts"));
    }

    #[test]
    fn cat_reads_files_and_rejects_directories() {
        let mut session = session();
        assert_eq!(
            run(&mut session, "cat /etc/hosts").as_deref(),
            Some("127.0.0.1 localhost\n::1 localhost")
        );
        assert_eq!(
            run(&mut session, "cat").as_deref(),
            Some("cat: missing file operand")
        );
        assert_eq!(
            run(&mut session, "cat Documents").as_deref(),
            Some("cat: /home/user/Documents: Is a directory")
        );
        assert_eq!(
            run(&mut session, "cat ghost.txt").as_deref(),
            Some("cat: /home/user/ghost.txt: No such file or directory")
        );
    }

    #[test]
    fn simple_commands_print_fixed_text() {
        let mut session = session();
        assert_eq!(run(&mut session, "echo  hello   world").as_deref(), Some("hello world"));
        assert_eq!(run(&mut session, "WHOAMI").as_deref(), Some("user@webos"));
        assert_eq!(
            run(&mut session, "date").as_deref(),
            Some("Monday, April 17, 2023 09:05:07")
        );
        assert_eq!(
            run(&mut session, "ping").as_deref(),
            Some("ping: missing host operand")
        );
        assert!(run(&mut session, "ping example.com")
            .is_some_and(|text| text.starts_with("PING example.com (127.0.0.1)")));
        assert_eq!(
            run(&mut session, "Frobnicate now").as_deref(),
            Some("Command not found: Frobnicate")
        );
    }

    #[test]
    fn history_lists_newest_first_including_itself() {
        let mut session = session();
        run(&mut session, "pwd");
        run(&mut session, "whoami");
        assert_eq!(
            run(&mut session, "history").as_deref(),
            Some("1  history\n2  whoami\n3  pwd")
        );
    }

    #[test]
    fn clear_empties_the_transcript() {
        let mut session = session();
        run(&mut session, "help");
        session.submit("clear", &clock());
        assert!(session.transcript().is_empty());
        assert_eq!(session.history(), &["clear".to_string(), "help".to_string()]);
    }

    #[test]
    fn history_cursor_walks_older_then_back_to_empty_input() {
        let mut session = session();
        assert_eq!(session.history_older(), None);
        run(&mut session, "pwd");
        run(&mut session, "ls");
        assert_eq!(session.history_older().as_deref(), Some("ls"));
        assert_eq!(session.history_older().as_deref(), Some("pwd"));
        assert_eq!(session.history_older(), None);
        assert_eq!(session.history_newer().as_deref(), Some("ls"));
        assert_eq!(session.history_newer().as_deref(), Some(""));
        assert_eq!(session.history_newer(), None);
    }

    #[test]
    fn tab_completes_unique_command_and_lists_ambiguous_ones() {
        let mut session = session();
        assert_eq!(session.complete("whoa").as_deref(), Some("whoami"));
        assert_eq!(session.complete("zz"), None);
        assert_eq!(session.complete("c"), None);
        assert_eq!(
            session.transcript().last(),
            Some(&TranscriptEntry::Output("credits  clear  cd  cat".to_string()))
        );
    }

    #[test]
    fn tab_completes_paths_for_path_commands_only() {
        let mut session = session();
        assert_eq!(session.complete("cd Doc").as_deref(), Some("cd Documents/"));
        assert_eq!(session.complete("cat /etc/ho").as_deref(), Some("cat /etc/hosts"));
        assert_eq!(session.complete("ls /usr/b").as_deref(), Some("ls /usr/bin/"));
        assert_eq!(session.complete("echo Doc"), None);
        assert_eq!(session.complete("ls /nowhere/x"), None);
    }

    #[test]
    fn completed_directory_paths_are_accepted_by_cd() {
        let mut session = session();
        let completed = session.complete("cd Doc").unwrap_or_default();
        session.submit(&completed, &clock());
        assert_eq!(session.cwd(), "/home/user/Documents");
    }
}
