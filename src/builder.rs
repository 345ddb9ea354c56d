//! Fluent URL builder
//!
//! A [`Thumbor`] instance is bound to one proxy server and optional signing
//! key. Configuration calls mutate its [`Parameters`] in place and return
//! `&mut Self` for chaining; [`Thumbor::build_url`] serializes, signs when a
//! key is configured, and resets the parameters.
//!
//! ```
//! use thumbor_url::{Thumbor, ThumborClientOptions};
//!
//! let mut thumbor = Thumbor::new(ThumborClientOptions::new("https://ex.com"));
//! let url = thumbor.set_path("img.jpg").resize(300, 200).build_url().unwrap();
//! assert_eq!(url, "https://ex.com/unsafe/300x200/img.jpg");
//! ```
//!
//! The builder is not synchronized. Share it across threads behind a lock
//! or give each task its own instance.

use std::fmt;

use crate::config::ThumborClientOptions;
use crate::error::ThumborError;
use crate::params::{
    Dimension, FitInType, HorizontalPosition, Parameters, VerticalPosition, WindowSizeAndPosition,
};
use crate::signing;

/// URL builder for one proxy server
#[derive(Clone)]
pub struct Thumbor {
    url: String,
    key: Option<String>,
    parameters: Parameters,
}

impl fmt::Debug for Thumbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbor")
            .field("url", &self.url)
            .field("signed", &self.is_signed())
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl Thumbor {
    pub fn new(options: ThumborClientOptions) -> Self {
        let key = options.signing_key().map(str::to_string);
        Self {
            url: options.url,
            key,
            parameters: Parameters::default(),
        }
    }

    /// Fresh transformation state
    pub fn default_parameters() -> Parameters {
        Parameters::default()
    }

    /// Base URL of the proxy
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether URLs are signed rather than `unsafe`
    pub fn is_signed(&self) -> bool {
        self.key.is_some()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Direct access for states the fluent surface does not reach,
    /// such as `orig` dimensions.
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Use an absolute or external image URL as the source, stored verbatim.
    pub fn set_image_source(&mut self, url: impl Into<String>) -> &mut Self {
        self.parameters.image_path = url.into();
        self
    }

    /// Set the image path; a single leading `/` is stripped.
    pub fn set_path(&mut self, path: &str) -> &mut Self {
        self.parameters.image_path = path.strip_prefix('/').unwrap_or(path).to_string();
        self
    }

    /// Plain resize. Clears any fit-in mode.
    pub fn resize(
        &mut self,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
    ) -> &mut Self {
        self.parameters.width = Some(width.into());
        self.parameters.height = Some(height.into());
        self.parameters.fit_in_type = None;
        self
    }

    pub fn smart_crop(&mut self, smart_crop: bool) -> &mut Self {
        self.parameters.smart = smart_crop;
        self
    }

    pub fn trim(&mut self) -> &mut Self {
        self.parameters.trim_flag = true;
        self
    }

    /// Fit within the box using the given mode. Replaces a plain resize.
    pub fn fit_in(
        &mut self,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
        fit_in_type: FitInType,
    ) -> &mut Self {
        self.parameters.width = Some(width.into());
        self.parameters.height = Some(height.into());
        self.parameters.fit_in_type = Some(fit_in_type);
        self
    }

    /// [`fit_in`](Self::fit_in) with [`FitInType::Default`]
    pub fn fit_in_default(
        &mut self,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
    ) -> &mut Self {
        self.fit_in(width, height, FitInType::Default)
    }

    pub fn flip_horizontally(&mut self) -> &mut Self {
        self.parameters.with_flip_horizontally = true;
        self
    }

    pub fn flip_vertically(&mut self) -> &mut Self {
        self.parameters.with_flip_vertically = true;
        self
    }

    pub fn halign(&mut self, halign: HorizontalPosition) -> &mut Self {
        self.parameters.halign_value = Some(halign);
        self
    }

    pub fn valign(&mut self, valign: VerticalPosition) -> &mut Self {
        self.parameters.valign_value = Some(valign);
        self
    }

    /// Append one filter call such as `quality(80)`. Order is preserved.
    pub fn filter(&mut self, filter_call: impl Into<String>) -> &mut Self {
        self.parameters.filters_calls.push(filter_call.into());
        self
    }

    pub fn crop(&mut self, crop: WindowSizeAndPosition) -> &mut Self {
        self.parameters.crop_values = Some(crop);
        self
    }

    /// Operation path for the current state, without resetting it
    pub fn operation_path(&self) -> String {
        self.parameters.operation_path()
    }

    /// Discard the accumulated transformation
    pub fn reset(&mut self) -> &mut Self {
        tracing::trace!(url = %self.url, "Resetting transformation parameters");
        self.parameters = Parameters::default();
        self
    }

    /// Build the final URL and reset the parameters.
    ///
    /// Signed: `{url}/{signature}/{operation}/{image_path}`.
    /// Unsigned: `{url}/unsafe/{operation}/{image_path}`.
    ///
    /// The `/` before the image path is emitted even when the operation path
    /// is empty. If signing fails the error is returned and the parameters
    /// are left untouched.
    pub fn build_url(&mut self) -> Result<String, ThumborError> {
        let operation = self.parameters.operation_path();
        let data_to_encrypt = format!("{}/{}", operation, self.parameters.image_path);

        let url = match &self.key {
            Some(key) => {
                let digest = signing::sign(key.as_bytes(), &data_to_encrypt)?;
                format!("{}/{}/{}", self.url, digest, data_to_encrypt)
            }
            None => format!("{}/unsafe/{}", self.url, data_to_encrypt),
        };

        tracing::debug!(
            operation = %operation,
            signed = self.key.is_some(),
            "Built image URL"
        );

        self.parameters = Parameters::default();

        Ok(url)
    }
}

/// Create a builder for the given proxy server
pub fn create_thumbor(options: ThumborClientOptions) -> Thumbor {
    Thumbor::new(options)
}
