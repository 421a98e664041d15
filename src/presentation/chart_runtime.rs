// One-time registration of the shared chart rendering options
use serde::Serialize;
use std::sync::OnceLock;

/// Render options shared by every chart, in the renderer's wire shape.
#[derive(Debug, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: PluginOptions,
}

#[derive(Debug, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub title: TitleOptions,
}

#[derive(Debug, Serialize)]
pub struct LegendOptions {
    pub position: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TitleOptions {
    pub display: bool,
    pub text: &'static str,
}

static CHART_RUNTIME: OnceLock<ChartOptions> = OnceLock::new();

/// Register the shared chart options once per process. Idempotent; called
/// explicitly at startup rather than as a module-load side effect.
pub fn init_chart_runtime() -> &'static ChartOptions {
    CHART_RUNTIME.get_or_init(|| ChartOptions {
        responsive: true,
        plugins: PluginOptions {
            legend: LegendOptions { position: "top" },
            title: TitleOptions {
                display: true,
                text: "Energy Dashboard",
            },
        },
    })
}

/// The registered options; initializes on first use if startup skipped it.
pub fn chart_options() -> &'static ChartOptions {
    init_chart_runtime()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init_chart_runtime();
        let second = init_chart_runtime();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_options_wire_shape() {
        let value = serde_json::to_value(chart_options()).unwrap();
        assert_eq!(value["responsive"], true);
        assert_eq!(value["plugins"]["legend"]["position"], "top");
        assert_eq!(value["plugins"]["title"]["display"], true);
    }
}
