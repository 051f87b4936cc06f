// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Environment, UndefinedBehavior, Value, default_auto_escape_callback};

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

/// Templates compiled into the binary, keyed by the name handlers render them by.
const EMBEDDED_TEMPLATES: [(&str, &str); 3] = [
    (
        "admin/layout.html",
        include_str!("../admin/templates/layout.html"),
    ),
    (
        "admin/dashboard.html",
        include_str!("../admin/templates/dashboard.html"),
    ),
    (
        "admin/error.html",
        include_str!("../admin/templates/error.html"),
    ),
];

pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        // A misspelled field in a template should fail the render, not print nothing.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_loader(embedded_template_loader);
        Self { env }
    }

    pub fn template_names() -> impl Iterator<Item = &'static str> {
        EMBEDDED_TEMPLATES.into_iter().map(|(name, _)| name)
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(template_name)?.render(context)
    }
}

fn embedded_template_loader(name: &str) -> Result<Option<String>, minijinja::Error> {
    Ok(EMBEDDED_TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, source)| source.to_string()))
}
