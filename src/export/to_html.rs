use crate::config::ChartConfig;
use crate::graph::RenderDescription;
use serde_json::json;
use std::error::Error;

pub fn render(
    description: &RenderDescription,
    chart_config: &ChartConfig,
) -> Result<String, Box<dyn Error>> {
    let handlebars = crate::common::get_handlebars();
    let res = handlebars.render_template(
        &get_template(),
        &json!({
            "page_title": chart_config.page_title,
            "echarts_url": chart_config.echarts_url,
            "height_px": chart_config.height_px,
            "option": super::to_echarts::render(description),
        }),
    )?;
    Ok(res)
}

pub fn get_template() -> String {
    include_str!("to_html.hbs").to_string()
}
