//! Built-in command table and the fixed text some commands print.

use thiserror::Error;

use platform_host::FsLookupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Commands the terminal understands.
pub enum Command {
    /// Lists the built-in commands.
    Help,
    /// Prints the credits banner.
    Credits,
    /// Empties the transcript.
    Clear,
    /// Prints its arguments.
    Echo,
    /// Prints the current date and time.
    Date,
    /// Lists a directory.
    Ls,
    /// Changes the working directory.
    Cd,
    /// Prints the working directory.
    Pwd,
    /// Prints a file.
    Cat,
    /// Prints the user name.
    Whoami,
    /// Prints the system name.
    Uname,
    /// Lists previous commands, newest first.
    History,
    /// Prints a fixed process table.
    Ps,
    /// Prints a fixed network configuration.
    Ifconfig,
    /// Prints a simulated ping exchange.
    Ping,
    /// Explains how to close the window.
    Exit,
}

impl Command {
    /// Every command in help order.
    pub const ALL: [Self; 16] = [
        Self::Help,
        Self::Credits,
        Self::Clear,
        Self::Echo,
        Self::Date,
        Self::Ls,
        Self::Cd,
        Self::Pwd,
        Self::Cat,
        Self::Whoami,
        Self::Uname,
        Self::History,
        Self::Ps,
        Self::Ifconfig,
        Self::Ping,
        Self::Exit,
    ];

    /// Name typed at the prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Credits => "credits",
            Self::Clear => "clear",
            Self::Echo => "echo",
            Self::Date => "date",
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Pwd => "pwd",
            Self::Cat => "cat",
            Self::Whoami => "whoami",
            Self::Uname => "uname",
            Self::History => "history",
            Self::Ps => "ps",
            Self::Ifconfig => "ifconfig",
            Self::Ping => "ping",
            Self::Exit => "exit",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        let lowered = name.to_lowercase();
        Self::ALL.into_iter().find(|command| command.name() == lowered)
    }

    /// Whether Tab completes a path for this command's last argument.
    pub const fn takes_path(self) -> bool {
        matches!(self, Self::Ls | Self::Cd | Self::Cat)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures printed in place of command output.
pub enum CommandError {
    /// Unknown command name, echoed as typed.
    #[error("Command not found: {0}")]
    NotFound(String),
    /// `ls` target is missing.
    #[error("ls: cannot access '{0}': No such file or directory")]
    ListMissing(String),
    /// `cd` target is missing or not a directory.
    #[error("cd: {path}: {reason}")]
    ChangeDirectory {
        /// Resolved absolute path.
        path: String,
        /// Lookup failure.
        reason: FsLookupError,
    },
    /// `cat` without an argument.
    #[error("cat: missing file operand")]
    MissingFileOperand,
    /// `cat` target is missing or a directory.
    #[error("cat: {path}: {reason}")]
    Read {
        /// Resolved absolute path.
        path: String,
        /// Lookup failure.
        reason: FsLookupError,
    },
    /// `ping` without a host.
    #[error("ping: missing host operand")]
    MissingHostOperand,
}

pub(crate) const BANNER: [&str; 2] = [
    "WebOS Terminal v1.0.0",
    "Type 'help' to see available commands",
];

pub(crate) const USER_NAME: &str = "user@webos";

pub(crate) const SYSTEM_NAME: &str = "WebOS v1.0.0 running in the browser";

pub(crate) const EXIT_HINT: &str = "Use the window close button to exit the terminal";

pub(crate) const HELP_TEXT: &str = "Available commands:
  help - Show this help message
  credits - Show project information
  clear - Clear the terminal
  echo [text] - Print text
  date - Show current date and time
  ls [path] - List files in directory
  cd [path] - Change directory
  pwd - Print working directory
  cat [file] - Display file contents
  whoami - Show current user
  uname - Show system information
  history - Show command history
  ps - List processes
  ifconfig - Show network configuration
  ping [host] - Ping a host
  exit - Close terminal";

pub(crate) const CREDITS_TEXT: &str = "\
╔═══════════════════════════════════════════════════════════════╗
║                                                               ║
║   WebOS - A web-based operating system interface              ║
║                                                               ║
║   Created by: Shadow                                          ║
║   GitHub: https://github.com/Shadow9308                       ║
║                                                               ║
║   Thank you for using WebOS!                                  ║
║                                                               ║
╚═══════════════════════════════════════════════════════════════╝";

pub(crate) const PS_TEXT: &str = "  PID TTY          TIME CMD
    1 ?        00:00:01 systemd
  123 ?        00:00:00 webos-server
  456 ?        00:00:02 window-manager
  789 tty1     00:00:01 bash
  790 tty1     00:00:00 ps";

pub(crate) const IFCONFIG_TEXT: &str = "eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 192.168.1.100  netmask 255.255.255.0  broadcast 192.168.1.255
        inet6 fe80::1  prefixlen 64  scopeid 0x20<link>
        ether 00:00:00:00:00:00  txqueuelen 1000  (Ethernet)
        RX packets 12345  bytes 1234567 (1.2 MB)
        RX errors 0  dropped 0  overruns 0  frame 0
        TX packets 12345  bytes 1234567 (1.2 MB)
        TX errors 0  dropped 0 overruns 0  carrier 0  collisions 0

lo: flags=73<UP,LOOPBACK,RUNNING>  mtu 65536
        inet 127.0.0.1  netmask 255.0.0.0
        inet6 ::1  prefixlen 128  scopeid 0x10<host>
        loop  txqueuelen 1000  (Local Loopback)
        RX packets 1234  bytes 123456 (123.4 KB)
        RX errors 0  dropped 0  overruns 0  frame 0
        TX packets 1234  bytes 123456 (123.4 KB)
        TX errors 0  dropped 0 overruns 0  carrier 0  collisions 0";

pub(crate) fn ping_text(host: &str) -> String {
    format!(
        "PING {host} (127.0.0.1) 56(84) bytes of data.
64 bytes from localhost (127.0.0.1): icmp_seq=1 ttl=64 time=0.01 ms
64 bytes from localhost (127.0.0.1): icmp_seq=2 ttl=64 time=0.02 ms
64 bytes from localhost (127.0.0.1): icmp_seq=3 ttl=64 time=0.01 ms
64 bytes from localhost (127.0.0.1): icmp_seq=4 ttl=64 time=0.02 ms

--- {host} ping statistics ---
4 packets transmitted, 4 received, 0% packet loss, time 3ms
rtt min/avg/max/mdev = 0.01/0.015/0.02/0.005 ms"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_rejects_unknown_names() {
        assert_eq!(Command::parse("LS"), Some(Command::Ls));
        assert_eq!(Command::parse("ifconfig"), Some(Command::Ifconfig));
        assert_eq!(Command::parse("mkdir"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn help_mentions_every_command() {
        for command in Command::ALL {
            assert!(
                HELP_TEXT.contains(&format!("  {} ", command.name())),
                "missing {}",
                command.name()
            );
        }
    }

    #[test]
    fn errors_use_command_style_wording() {
        assert_eq!(
            CommandError::ChangeDirectory {
                path: "/etc/hosts".to_string(),
                reason: FsLookupError::NotADirectory,
            }
            .to_string(),
            "cd: /etc/hosts: Not a directory"
        );
        assert_eq!(
            CommandError::Read {
                path: "/home".to_string(),
                reason: FsLookupError::IsADirectory,
            }
            .to_string(),
            "cat: /home: Is a directory"
        );
        assert_eq!(
            CommandError::NotFound("Foo".to_string()).to_string(),
            "Command not found: Foo"
        );
    }
}
