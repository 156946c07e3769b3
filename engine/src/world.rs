//! The `World` aggregate (§9 "Global mutable state"): the single struct the
//! tick loop mutates, generic over its render/audio/stage-loading
//! collaborators so tests and the demo binary can supply no-op stand-ins.

use platformer_core::constants::{InputButtons, MAX_ENEMIES, MAX_FIREBALLS, MAX_HP};
use platformer_core::types::{Enemy, Fireball, Player, Score, Stage};

use crate::combat;
use crate::door::{self, DoorOutcome, SourceDoor};
use crate::enemy::{self, SpawnScheduler};
use crate::fireball;
use crate::interfaces::{AudioDriver, Renderer, StageSource};
use crate::item::{self, ItemsCollected};
use crate::physics::{self, PhysicsOutcome};
use crate::tick::TickOutcome;

pub struct World<R: Renderer, A: AudioDriver, S: StageSource> {
    pub player: Player,
    pub enemies: [Enemy; MAX_ENEMIES],
    pub fireballs: [Fireball; MAX_FIREBALLS],
    pub stage: Stage,
    pub score: Score,
    pub camera_x: i32,
    pub current_level: usize,
    pub current_stage: usize,
    pub items_collected: ItemsCollected,
    pub source_door: Option<SourceDoor>,
    pub spawn_scheduler: SpawnScheduler,
    pub tick_count: u64,

    pub renderer: R,
    pub audio: A,
    pub stage_source: S,
}

impl<R: Renderer, A: AudioDriver, S: StageSource> World<R, A, S> {
    pub fn new(player: Player, stage: Stage, renderer: R, audio: A, stage_source: S) -> Self {
        Self {
            player,
            enemies: std::array::from_fn(|_| Enemy::unused()),
            fireballs: std::array::from_fn(|_| Fireball::dead()),
            stage,
            score: Score::new(),
            camera_x: 0,
            current_level: 0,
            current_stage: 0,
            items_collected: ItemsCollected::new(),
            source_door: None,
            spawn_scheduler: SpawnScheduler::new(),
            tick_count: 0,
            renderer,
            audio,
            stage_source,
        }
    }

    /// Runs one tick in the fixed order §4.1 specifies, returning whichever
    /// loop-termination signal applies (`Continue` most of the time).
    pub fn tick(&mut self, input: InputButtons) -> TickOutcome {
        self.audio.advance_tick();

        if input.contains(InputButtons::PAUSE) {
            return TickOutcome::Quit;
        }

        if self.player.win_counter > 0 {
            self.player.win_counter -= 1;
            if self.player.win_counter == 1 {
                return TickOutcome::Victory;
            }
        }

        self.player.heal_one();

        if self.player.is_teleporting || self.player.is_airborne {
            let outcome = physics::update_airborne(
                &mut self.player,
                &mut self.stage,
                &mut self.camera_x,
                self.current_level,
                &mut self.current_stage,
                &mut self.stage_source,
                input,
            );
            if outcome == PhysicsOutcome::Died {
                return self.handle_player_death();
            }
        } else {
            physics::handle_grounded_input(
                &mut self.player,
                &mut self.stage,
                &mut self.camera_x,
                self.current_level,
                &mut self.current_stage,
                &mut self.stage_source,
                input,
            );
        }

        let door_outcome = door::try_activate(
            &mut self.player,
            &mut self.stage,
            &mut self.current_level,
            &mut self.current_stage,
            &mut self.source_door,
            &mut self.stage_source,
            input,
            &mut self.audio,
        );
        if matches!(door_outcome, DoorOutcome::Transitioned { .. }) {
            self.tick_count += 1;
            return TickOutcome::Continue;
        }

        if input.contains(InputButtons::FIRE) {
            fireball::try_spawn(&self.player, &mut self.fireballs, &mut self.audio);
        }

        enemy::update_all(
            &mut self.enemies,
            &mut self.player,
            &self.stage,
            self.camera_x,
            &mut self.spawn_scheduler,
            &mut self.audio,
        );
        if self.player.dying {
            return self.handle_player_death();
        }

        fireball::update_all(
            &mut self.fireballs,
            &mut self.player,
            self.camera_x,
            &mut self.enemies,
            &mut self.score,
            &mut self.audio,
            &mut self.renderer,
        );

        item::update(
            &mut self.stage,
            &mut self.items_collected,
            self.current_level,
            self.current_stage,
            &mut self.player,
            self.camera_x,
            &mut self.score,
            &mut self.audio,
            &mut self.renderer,
        );

        self.renderer.render_tile_map(&self.stage, self.camera_x);
        self.renderer.render_player(&self.player, self.camera_x);

        self.tick_count += 1;
        TickOutcome::Continue
    }

    /// Hands off to `combat::hero_dies`, then either reloads the current
    /// stage (another life remains) or reports game over (§4.8, §4.9).
    fn handle_player_death(&mut self) -> TickOutcome {
        if combat::hero_dies(&mut self.player) {
            return TickOutcome::GameOver;
        }
        self.stage = self.stage_source.load_stage(self.current_level, self.current_stage);
        let (x, y) = (self.player.x, self.player.y);
        self.player.reset_for_stage_entry(x, y);
        self.player.hp = MAX_HP;
        self.tick_count += 1;
        TickOutcome::Continue
    }
}
