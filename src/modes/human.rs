use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Difficulty, GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::score::HighScoreStore;

/// Interactive play: a fixed-rate tick loop fed by keyboard events.
///
/// The loop is the only driver of the engine, so all mutating calls are
/// naturally serialized; the engine itself stays single-threaded.
pub struct HumanMode {
    engine: GameEngine,
    renderer: Renderer,
    input_handler: InputHandler,
    high_scores: HighScoreStore,
    difficulty: Difficulty,
    should_quit: bool,
    score_recorded: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, difficulty: Difficulty, high_scores: HighScoreStore) -> Self {
        Self {
            engine: GameEngine::new(config),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            high_scores,
            difficulty,
            should_quit: false,
            score_recorded: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        // Farewell outside the alternate screen
        println!("Thanks for playing!");
        println!("High Score: {}", self.high_scores.high_score());

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game tick cadence comes from the selected difficulty
        let mut tick_timer = interval(self.difficulty.tick_duration());

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    let high_score = self.high_scores.high_score();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.engine, high_score);
                    }).context("Failed to draw frame")?;
                }

                // Ctrl+C is a clean quit
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.engine.handle_input(direction);
                }
                KeyAction::TogglePause => {
                    self.engine.toggle_pause();
                }
                KeyAction::Restart => {
                    self.engine.restart();
                    self.score_recorded = false;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        self.engine.tick();

        // Record the final score once per game, the moment it ends
        if self.engine.state().is_terminal() && !self.score_recorded {
            self.high_scores.record(self.engine.score());
            self.score_recorded = true;
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
