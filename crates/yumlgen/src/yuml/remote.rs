//! Remote diagram rendering client
//!
//! Talks to the yuml.me web service: one POST with the DSL text that returns
//! a generated filename, then one GET that fetches the rendered image. Both
//! calls are blocking and run to completion; failures surface as transport
//! errors without retries.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::core::{RenderOptions, YumlError};
use crate::yuml::statement::{join_dsl, Statement};

/// Default base URL of the rendering service
pub const YUML_BASE_URL: &str = "http://yuml.me";

/// Blocking client for the yuml.me rendering service
pub struct YumlClient {
    base_url: String,
    agent: ureq::Agent,
}

impl YumlClient {
    pub fn new() -> Self {
        Self::with_base_url(YUML_BASE_URL)
    }

    /// Point the client at a different service, e.g. a local test server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            agent: ureq::agent(),
        }
    }

    /// URL of the diagram-generation endpoint for the given options
    pub fn diagram_url(&self, options: &RenderOptions) -> String {
        format!(
            "{}/diagram/{};scale:{};dir:{};/class/",
            self.base_url, options.style, options.scale, options.direction
        )
    }

    /// Render the statements remotely and save the image to `output`
    ///
    /// The image format follows from the output path's extension (png, jpg,
    /// pdf, ...).
    pub fn render(
        &self,
        statements: &[Statement],
        options: &RenderOptions,
        output: &Path,
    ) -> Result<(), YumlError> {
        let dsl_text = join_dsl(statements);

        let url = self.diagram_url(options);
        info!(%url, "requesting diagram generation");
        let response = self
            .agent
            .post(&url)
            .send_form(&[("dsl_text", dsl_text.as_str())])
            .map_err(|e| YumlError::transport_error(&url, e))?;
        let generated = response.into_string()?;

        let file = remote_file_name(generated.trim(), output);
        let image_url = format!("{}/{}", self.base_url, file);
        info!(url = %image_url, "fetching rendered image");
        let response = self
            .agent
            .get(&image_url)
            .call()
            .map_err(|e| YumlError::transport_error(&image_url, e))?;

        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        fs::write(output, bytes)?;
        Ok(())
    }
}

impl Default for YumlClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Swap the `.png` suffix of the generated filename for the extension of the
/// requested output path. A path without an extension strips the suffix.
fn remote_file_name(generated: &str, output: &Path) -> String {
    let extension = output
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    generated.replace(".png", &extension)
}
