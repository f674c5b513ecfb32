//! CLI shell for the Meiro game client.
//!
//! Thin transport and rendering glue around the session store: it logs
//! in, forwards player commands to the server, feeds every response
//! through the snapshot usecase, and prints whatever new lines the
//! message log gained. Local `move` commands bypass the server and run
//! the optimistic movement check against the explored map.

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use meiro_client::domain::{Session, SessionRepository, Timestamp};
use meiro_client::infrastructure::dto::GameResponseDto;
use meiro_client::infrastructure::repository::InMemorySessionRepository;
use meiro_client::ui::map;
use meiro_client::usecase::{ApplySnapshotUseCase, MovePlayerUseCase};
use meiro_shared::{get_jst_timestamp, init_logger, timestamp_to_jst_rfc3339};

/// CLI client for the Meiro text-adventure server
#[derive(Debug, Parser)]
#[command(name = "meiro-client", version, about)]
struct Args {
    /// Base URL of the game server
    #[arg(long, default_value = "http://localhost:8080")]
    server: String,

    /// Account name to log in with
    #[arg(long)]
    username: String,

    /// Account password
    #[arg(long, default_value = "")]
    password: String,
}

struct GameShell {
    http: reqwest::Client,
    server: String,
    repository: Arc<InMemorySessionRepository>,
    apply_snapshot: ApplySnapshotUseCase,
    move_player: MovePlayerUseCase,
    /// Index of the first message-log line not yet printed
    printed: usize,
}

impl GameShell {
    fn new(server: String) -> Self {
        let repository = Arc::new(InMemorySessionRepository::new(Session::new(Timestamp::new(
            get_jst_timestamp(),
        ))));
        let apply_snapshot = ApplySnapshotUseCase::new(repository.clone());
        let move_player = MovePlayerUseCase::new(repository.clone());
        Self {
            http: reqwest::Client::new(),
            server,
            repository,
            apply_snapshot,
            move_player,
            printed: 0,
        }
    }

    async fn login(&mut self, username: &str, password: &str) -> Result<(), Box<dyn Error>> {
        let response: GameResponseDto = self
            .http
            .post(format!("{}/api/login", self.server))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?
            .json()
            .await?;
        self.apply_snapshot.execute(response).await;
        self.flush_messages().await;
        Ok(())
    }

    /// Forward one command to the server and reconcile the response.
    /// Returns true when the server flagged the game as over.
    async fn send_command(&mut self, command: &str) -> bool {
        self.repository
            .append_message(format!("> {command}"))
            .await;

        let session_id = self
            .repository
            .session()
            .await
            .session_id
            .unwrap_or_default();
        let result = self
            .http
            .post(format!("{}/api/command", self.server))
            .header("X-Session-Id", session_id)
            .form(&[("command", command)])
            .send()
            .await;

        let game_over = match result {
            Ok(response) => match response.json::<GameResponseDto>().await {
                Ok(dto) => {
                    let game_over = dto.is_game_over();
                    self.apply_snapshot.execute(dto).await;
                    game_over
                }
                Err(err) => {
                    tracing::warn!(%err, "unreadable server response");
                    self.repository
                        .append_message("Command failed, is the server reachable?".to_string())
                        .await;
                    false
                }
            },
            Err(err) => {
                tracing::warn!(%err, "command request failed");
                self.repository
                    .append_message("Command failed, is the server reachable?".to_string())
                    .await;
                false
            }
        };
        self.flush_messages().await;
        game_over
    }

    async fn local_move(&mut self, direction: &str) {
        // Outcome messages land in the log either way; nothing to match on.
        let _ = self.move_player.execute(direction).await;
        self.flush_messages().await;
    }

    async fn print_map(&self) {
        let session = self.repository.session().await;
        print!("{}", map::render(&session.room_map, session.room_name.as_ref()));
    }

    async fn print_status(&self) {
        let session = self.repository.session().await;
        let player = session.player_name.as_deref().unwrap_or("?");
        let room = session
            .room_name
            .as_ref()
            .map(|r| r.as_str())
            .unwrap_or("?");
        println!("player:  {player}");
        println!("room:    {room}");
        println!(
            "weight:  {:.1} / {:.1}",
            session.total_weight, session.weight_limit
        );
        println!("visited: {} rooms", session.visited_rooms.len());
        println!(
            "since:   {}",
            timestamp_to_jst_rfc3339(session.started_at.value())
        );
    }

    /// Print every message-log line that appeared since the last flush
    async fn flush_messages(&mut self) {
        let session = self.repository.session().await;
        for line in &session.messages[self.printed.min(session.messages.len())..] {
            println!("{line}");
        }
        self.printed = session.messages.len();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logger();
    let args = Args::parse();

    let mut shell = GameShell::new(args.server);
    shell.login(&args.username, &args.password).await?;

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match line {
                    "quit" | "exit" => break,
                    "map" => shell.print_map().await,
                    "status" => shell.print_status().await,
                    _ => {
                        if let Some(direction) = line.strip_prefix("move ") {
                            shell.local_move(direction).await;
                        } else if shell.send_command(line).await {
                            println!("The game is over.");
                            break;
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                tracing::error!(%err, "readline failed");
                break;
            }
        }
    }
    Ok(())
}
