use yew::prelude::*;

use crate::model::{GuardStats, Position};

#[derive(Properties, PartialEq, Clone)]
pub struct CameraReadoutProps {
    pub position: Position,
    pub stats: GuardStats,
    pub forced: bool,
}

#[function_component(CameraReadout)]
pub fn camera_readout(props: &CameraReadoutProps) -> Html {
    let status = if props.forced { "forced collision" } else { "clear" };
    html! {
        <div style="position:absolute; left:12px; top:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; color:#c9d1d9; font-family:monospace;">
            <div>{ format!("camera {}", props.position) }</div>
            <div>{ format!("moves: {}", props.stats.events) }</div>
            <div>{ format!("resets: {}", props.stats.resets) }</div>
            <div>{ format!("check: {status}") }</div>
        </div>
    }
}
