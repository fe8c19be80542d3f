use serde_json::{json, Map, Value};

use crate::graph::{RenderDescription, RenderGraph};

/// ECharts option object for a render description
pub fn render(description: &RenderDescription) -> Value {
    match description {
        RenderDescription::Empty(empty) => json!({
            "title": {
                "text": empty.title,
                "left": "center",
                "top": "center",
            }
        }),
        RenderDescription::Graph(graph) => render_graph(graph),
    }
}

fn render_graph(graph: &RenderGraph) -> Value {
    let layout = &graph.layout;

    let data: Vec<Value> = graph
        .nodes
        .iter()
        .map(|node| {
            json!({
                "id": node.id,
                "name": node.label,
                "symbolSize": node.size,
                "itemStyle": { "color": node.color },
            })
        })
        .collect();

    let links: Vec<Value> = graph
        .links
        .iter()
        .map(|link| {
            let mut value = json!({
                "source": link.source,
                "target": link.target,
                "lineStyle": { "color": link.style.color },
            });
            if let (Some(relationship), Some(map)) = (&link.relationship, value.as_object_mut()) {
                map.insert("value".to_string(), Value::from(relationship.as_str()));
            }
            value
        })
        .collect();

    let focus = if layout.focus_adjacency {
        "adjacency"
    } else {
        "none"
    };
    let series = json!({
        "type": "graph",
        "layout": layout.layout,
        "data": data,
        "links": links,
        "roam": layout.roam,
        "focusNodeAdjacency": layout.focus_adjacency,
        "emphasis": {
            "focus": focus,
        },
        "label": {
            "show": layout.label.show,
            "position": layout.label.position,
            "formatter": layout.label.formatter,
        },
        "lineStyle": {
            "color": layout.line_color,
            "curveness": layout.curveness,
        },
        "force": {
            "repulsion": layout.repulsion,
            "edgeLength": layout.edge_length,
        },
    });

    let mut option = Map::new();
    option.insert(
        "title".to_string(),
        json!({ "text": graph.title, "left": "center" }),
    );
    if layout.tooltip {
        option.insert("tooltip".to_string(), json!({}));
    }
    option.insert(
        "animationDurationUpdate".to_string(),
        Value::from(layout.animation_duration_update),
    );
    option.insert(
        "animationEasingUpdate".to_string(),
        Value::from(layout.animation_easing_update),
    );
    option.insert("series".to_string(), Value::Array(vec![series]));
    Value::Object(option)
}
