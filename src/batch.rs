//! # Batch Expander
//!
//! Validates a list of label configurations and expands it into draw jobs.
//!
//! All per-configuration work (template lookup, content validation, style
//! resolution, slot sizing) happens once in [`Batch::expand`]. The job stream
//! then yields `quantity` consecutive jobs per configuration, in input order,
//! each borrowing that configuration's content and style.
//!
//! ```text
//! [cfg0 ×2, cfg1 ×3] ──expand──► Batch ──jobs()──► cfg0 cfg0 cfg1 cfg1 cfg1
//! ```

use tracing::debug;

use crate::error::LabelError;
use crate::ir::DrawOp;
use crate::label::{LabelConfig, LabelContent};
use crate::page::{PackMode, PageSpec, Size};
use crate::style::ResolvedStyle;
use crate::templates::{self, RenderInput, Template};

/// Most copies of one configuration in a batch.
pub const MAX_QUANTITY: usize = 1_000;

/// Most label instances in one batch.
pub const MAX_LABELS: usize = 5_000;

/// One validated configuration.
#[derive(Debug, Clone)]
pub struct BatchEntry<'a> {
    /// Position in the input list.
    pub index: usize,
    pub config: &'a LabelConfig,
    pub template: &'static Template,
    pub style: ResolvedStyle,
    pub size: Size,
    pub quantity: usize,
}

/// A validated, expanded batch.
#[derive(Debug, Clone)]
pub struct Batch<'a> {
    entries: Vec<BatchEntry<'a>>,
}

impl<'a> Batch<'a> {
    /// Validate every configuration and resolve its template, style and size.
    ///
    /// The first invalid configuration rejects the whole batch.
    pub fn expand(configs: &'a [LabelConfig], page: &PageSpec, mode: &PackMode) -> Result<Self, LabelError> {
        if configs.is_empty() {
            return Err(LabelError::Configuration("batch contains no labels".into()));
        }

        let mut entries = Vec::with_capacity(configs.len());
        let mut total: usize = 0;
        for (index, config) in configs.iter().enumerate() {
            let quantity = usize::try_from(config.quantity)
                .ok()
                .filter(|quantity| (1..=MAX_QUANTITY).contains(quantity))
                .ok_or_else(|| {
                    LabelError::Configuration(format!(
                        "label {} has quantity {}; quantity must be between 1 and {}",
                        index, config.quantity, MAX_QUANTITY
                    ))
                })?;
            total = total
                .checked_add(quantity)
                .filter(|total| *total <= MAX_LABELS)
                .ok_or_else(|| {
                    LabelError::Configuration(format!(
                        "batch exceeds {} labels in total",
                        MAX_LABELS
                    ))
                })?;
            config.content.validate()?;

            let template = templates::lookup(&config.template)?;
            let size = template
                .geometry
                .slot_size(mode, config.content.line_count());
            if !page.fits(size) {
                return Err(LabelError::Configuration(format!(
                    "label {} ({}x{}) exceeds the usable page area {}x{}",
                    index,
                    size.width,
                    size.height,
                    page.usable_width(),
                    page.usable_height()
                )));
            }

            let style = ResolvedStyle::resolve(
                config.font.as_deref(),
                config.color.as_deref(),
                config.border_color.as_deref(),
            );

            debug!(index, template = template.tag, quantity, "label config");
            entries.push(BatchEntry {
                index,
                config,
                template,
                style,
                size,
                quantity,
            });
        }

        let batch = Self { entries };
        if let PackMode::Fixed { .. } = mode {
            batch.uniform_size().ok_or_else(|| {
                LabelError::Configuration(
                    "fixed mode needs every label to share one size; use flow mode for mixed templates"
                        .into(),
                )
            })?;
        }
        Ok(batch)
    }

    pub fn entries(&self) -> &[BatchEntry<'a>] {
        &self.entries
    }

    /// Total number of label instances.
    pub fn total(&self) -> usize {
        self.entries
            .iter()
            .fold(0, |total: usize, entry| total.saturating_add(entry.quantity))
    }

    /// The shared slot size, if every entry has the same one.
    pub fn uniform_size(&self) -> Option<Size> {
        let first = self.entries.first()?.size;
        self.entries
            .iter()
            .all(|entry| entry.size == first)
            .then_some(first)
    }

    /// Every label instance, configuration by configuration.
    pub fn jobs(&self) -> impl Iterator<Item = DrawJob<'_>> + '_ {
        self.entries.iter().flat_map(|entry| {
            (0..entry.quantity).map(move |_| DrawJob {
                config_index: entry.index,
                template: entry.template,
                content: &entry.config.content,
                style: &entry.style,
                size: entry.size,
            })
        })
    }
}

/// One label instance to draw.
#[derive(Debug, Clone, Copy)]
pub struct DrawJob<'a> {
    pub config_index: usize,
    pub template: &'static Template,
    pub content: &'a LabelContent,
    pub style: &'a ResolvedStyle,
    pub size: Size,
}

impl DrawJob<'_> {
    /// Render this job in slot-relative coordinates.
    pub fn render(&self) -> Vec<DrawOp> {
        self.template.render(&RenderInput {
            size: self.size,
            content: self.content,
            style: self.style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn display(template: &str, quantity: i64) -> LabelConfig {
        LabelConfig {
            template: template.into(),
            quantity,
            content: LabelContent::Display {
                title: "Laptop".into(),
                bullets: vec!["16GB".into()],
            },
            font: None,
            color: Some("red".into()),
            border_color: None,
        }
    }

    fn price(template: &str, quantity: i64) -> LabelConfig {
        LabelConfig {
            template: template.into(),
            quantity,
            content: LabelContent::Price {
                price: "99".into(),
                original_price: None,
                logo: None,
            },
            font: Some("times".into()),
            color: None,
            border_color: None,
        }
    }

    #[test]
    fn test_jobs_in_order_never_interleaved() {
        let configs = vec![price("oval", 2), price("ovalado", 3)];
        let batch = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::fixed()).unwrap();
        let order: Vec<usize> = batch.jobs().map(|job| job.config_index).collect();
        assert_eq!(order, vec![0, 0, 1, 1, 1]);
        assert_eq!(batch.total(), 5);
    }

    #[test]
    fn test_repeats_share_style() {
        let configs = vec![price("oval", 3)];
        let batch = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::fixed()).unwrap();
        let jobs: Vec<DrawJob<'_>> = batch.jobs().collect();
        assert!(std::ptr::eq(jobs[0].style, jobs[2].style));
        assert!(std::ptr::eq(jobs[0].content, &configs[0].content));
    }

    #[test]
    fn test_empty_batch() {
        let result = Batch::expand(&[], &PageSpec::LETTER, &PackMode::fixed());
        assert!(matches!(result, Err(LabelError::Configuration(_))));
    }

    #[test]
    fn test_zero_and_negative_quantity() {
        for quantity in [0, -2] {
            let configs = vec![display("classic-rect", quantity)];
            let result = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::fixed());
            assert!(matches!(result, Err(LabelError::Configuration(_))));
        }
    }

    #[test]
    fn test_quantity_upper_bound() {
        let at_limit = vec![display("classic-rect", MAX_QUANTITY as i64)];
        let batch = Batch::expand(&at_limit, &PageSpec::LETTER, &PackMode::fixed()).unwrap();
        assert_eq!(batch.total(), MAX_QUANTITY);

        for quantity in [MAX_QUANTITY as i64 + 1, i64::MAX] {
            let configs = vec![display("classic-rect", quantity)];
            let result = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::fixed());
            assert!(matches!(result, Err(LabelError::Configuration(_))), "quantity {} accepted", quantity);
        }
    }

    #[test]
    fn test_batch_total_bounded() {
        let per_config = MAX_QUANTITY as i64;
        let configs: Vec<_> = (0..=MAX_LABELS / MAX_QUANTITY)
            .map(|_| display("classic-rect", per_config))
            .collect();
        let result = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::fixed());
        match result {
            Err(LabelError::Configuration(message)) => assert!(message.contains("in total")),
            other => panic!("expected total limit error, got {:?}", other.map(|b| b.total())),
        }
    }

    #[test]
    fn test_unknown_template_rejects_batch() {
        let configs = vec![display("classic-rect", 1), display("hexagon", 1)];
        let result = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::flow());
        assert!(matches!(result, Err(LabelError::UnknownVariant(_))));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut config = display("classic-rect", 1);
        config.content = LabelContent::Display {
            title: String::new(),
            bullets: vec![],
        };
        let result = Batch::expand(std::slice::from_ref(&config), &PageSpec::LETTER, &PackMode::fixed());
        assert!(matches!(result, Err(LabelError::Configuration(_))));
    }

    #[test]
    fn test_oversize_for_page() {
        // Usable area is 220 x 220, narrower than the 250pt oval
        let page = PageSpec::new(300.0, 300.0, 40.0).unwrap();
        let configs = vec![price("oval", 1)];
        let result = Batch::expand(&configs, &page, &PackMode::fixed());
        assert!(matches!(result, Err(LabelError::Configuration(_))));
    }

    #[test]
    fn test_mixed_sizes_need_flow() {
        let configs = vec![display("classic-rect", 1), price("oval", 1)];
        assert!(matches!(
            Batch::expand(&configs, &PageSpec::LETTER, &PackMode::fixed()),
            Err(LabelError::Configuration(_))
        ));
        let batch = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::flow()).unwrap();
        assert_eq!(batch.uniform_size(), None);
    }

    #[test]
    fn test_flow_sizes_per_config() {
        let configs = vec![display("classic-rect", 2)];
        let batch = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::flow()).unwrap();
        // 120 + 12 * 2 lines
        assert_eq!(batch.entries()[0].size, Size::new(144.0, 240.0));
        assert!(batch.jobs().all(|job| job.size == Size::new(144.0, 240.0)));
    }

    #[test]
    fn test_style_resolved_per_config() {
        let configs = vec![price("oval", 1)];
        let batch = Batch::expand(&configs, &PageSpec::LETTER, &PackMode::fixed()).unwrap();
        assert_eq!(batch.entries()[0].style, ResolvedStyle::resolve(Some("times"), None, None));
    }
}
