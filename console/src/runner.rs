use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior};

use tictactoe_engine::tictactoe::{
    PendingComputerMove, Session, SessionPhase, SessionSnapshot, TimerTick,
};
use tictactoe_engine::{debug_log, log};

use crate::command::{ConsoleCommand, HELP, parse_command};
use crate::render::{render_frame, render_scores};

const TIMER_TICK: Duration = Duration::from_secs(1);

enum Flow {
    Continue,
    Quit,
}

pub struct ConsoleRunner {
    session: Session,
    pending: Option<PendingComputerMove>,
}

impl ConsoleRunner {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            pending: None,
        }
    }

    pub async fn run(mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let mut ticker = tokio::time::interval_at(Instant::now() + TIMER_TICK, TIMER_TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let delay = tokio::time::sleep(Duration::ZERO);
        tokio::pin!(delay);

        println!("{}", HELP);
        println!("{}", render_frame(&self.session.snapshot()));

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        log!("stdin closed, exiting");
                        break;
                    };
                    if let Flow::Quit = self.handle_line(&line) {
                        break;
                    }
                }
                _ = &mut delay, if self.pending.is_some() => {
                    if let Some(pending) = self.pending.take()
                        && let Some(snapshot) = self.session.run_scheduled(pending)
                    {
                        self.show(&snapshot);
                    }
                }
                _ = ticker.tick() => {
                    match self.session.tick_timer() {
                        TimerTick::Idle => {}
                        TimerTick::Running(remaining) => {
                            debug_log!("[console] {}s left", remaining);
                            if remaining <= 3 {
                                println!("{}s left!", remaining);
                            }
                        }
                        TimerTick::Expired(snapshot) => {
                            println!("Out of time!");
                            self.show(&snapshot);
                        }
                    }
                }
            }

            // A reset may have orphaned the armed delay; a newer schedule replaces it.
            if let Some(pending) = self.session.schedule_computer_move()
                && self.pending.is_none_or(|current| current.generation != pending.generation)
            {
                delay.as_mut().reset(Instant::now() + pending.delay);
                self.pending = Some(pending);
                println!("{}", render_frame(&self.session.snapshot()));
            }
        }

        println!("{}", render_scores(&self.session.scores()));
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                return Flow::Continue;
            }
        };

        match command {
            ConsoleCommand::Place(index) => {
                match self.session.phase() {
                    SessionPhase::AwaitingPlayerMove => {}
                    SessionPhase::AwaitingComputerMove => {
                        println!("Wait for your turn.");
                        return Flow::Continue;
                    }
                    SessionPhase::Terminal => {
                        println!("Game over. Type 'reset' to play again.");
                        return Flow::Continue;
                    }
                }
                let before = self.session.snapshot();
                let after = self.session.submit_player_move(index);
                if before == after {
                    println!("Cell {} is not available.", index + 1);
                } else if after.phase != SessionPhase::AwaitingComputerMove {
                    self.show(&after);
                }
            }
            ConsoleCommand::Reset => {
                self.session.reset();
                self.show(&self.session.snapshot());
            }
            ConsoleCommand::Size(size) => {
                self.session.set_board_size(size);
                self.show(&self.session.snapshot());
            }
            ConsoleCommand::Difficulty(difficulty) => {
                self.session.set_difficulty(difficulty);
                println!("Difficulty: {}", difficulty);
            }
            ConsoleCommand::Timer(enabled) => {
                let seconds = self.session.timer().seconds();
                self.session.set_turn_timer(enabled, seconds);
                println!("Turn timer {}", if enabled { "on" } else { "off" });
            }
            ConsoleCommand::SearchDepth(depth) => {
                self.session.set_max_search_depth(depth);
                match depth {
                    Some(depth) => println!("Search depth capped at {}", depth),
                    None => println!("Search depth unlimited"),
                }
            }
            ConsoleCommand::Scores => println!("{}", render_scores(&self.session.scores())),
            ConsoleCommand::Help => println!("{}", HELP),
            ConsoleCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn show(&self, snapshot: &SessionSnapshot) {
        println!("{}", render_frame(snapshot));
        if snapshot.outcome.is_terminal() {
            println!("{}", render_scores(&self.session.scores()));
            println!("Type 'reset' to play again.");
        }
    }
}
