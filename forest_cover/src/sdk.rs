//! SDK entry points and builder for composing the forest viewer app.

use bevy::prelude::*;

use crate::config::{self, ViewerConfig};
use crate::data::{dataset_channel_from, init_dataset_channel, Dataset};
use crate::input::{gamepad_plugin, keyboard_plugin, InputSettings};
use crate::render::{RendererResource, TreeRenderer, TrunkAndCrownRenderer};
use crate::scene::{forest_plugin, ForestRng, ForestSettings};
use crate::ui::{hud_plugin, panel_plugin, warn_panel_missing};

/// Builder for constructing a Canopy app with customizable plugins.
pub struct ForestViewerBuilder {
    config: Option<ViewerConfig>,
    dataset: Option<Dataset>,
    renderer: Option<Box<dyn TreeRenderer>>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_hud: bool,
    enable_panel: bool,
    enable_keyboard: bool,
    enable_gamepad: bool,
}

impl Default for ForestViewerBuilder {
    fn default() -> Self {
        Self {
            config: None,
            dataset: None,
            renderer: None,
            window_title: "Canopy".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: Color::srgb(0.55, 0.7, 0.85),
            enable_hud: true,
            enable_panel: true,
            enable_keyboard: true,
            enable_gamepad: true,
        }
    }
}

impl ForestViewerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit configuration instead of reading the environment.
    pub fn config(mut self, config: ViewerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Show this dataset instead of loading `config.data_path`.
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Provide a custom tree renderer implementation.
    pub fn renderer(mut self, renderer: impl TreeRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    /// Run without the country/year panel (headset use).
    pub fn disable_panel(mut self) -> Self {
        self.enable_panel = false;
        self
    }

    pub fn disable_keyboard(mut self) -> Self {
        self.enable_keyboard = false;
        self
    }

    pub fn disable_gamepad(mut self) -> Self {
        self.enable_gamepad = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let config = self.config.unwrap_or_else(config::viewer_config);
        let channel = match self.dataset {
            Some(dataset) => dataset_channel_from(dataset),
            None => init_dataset_channel(config.data_path.clone()),
        };
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(TrunkAndCrownRenderer::default()));

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(channel)
        .insert_resource(ForestSettings::from(&config))
        .insert_resource(ForestRng::from_seed(config.seed))
        .insert_resource(InputSettings(config.input));

        renderer.setup(&mut app);
        app.insert_resource(RendererResource(renderer));
        app.add_plugins(forest_plugin);

        if self.enable_keyboard {
            app.add_plugins(keyboard_plugin);
        }
        if self.enable_gamepad {
            app.add_plugins(gamepad_plugin);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if self.enable_panel {
            app.add_plugins(panel_plugin);
        } else {
            app.add_systems(Startup, warn_panel_missing);
        }

        app
    }
}
