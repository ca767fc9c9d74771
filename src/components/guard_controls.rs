use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GuardControlsProps {
    pub forced: bool,
    pub on_force: Callback<bool>,
    pub on_nudge: Callback<()>,
}

#[function_component(GuardControls)]
pub fn guard_controls(props: &GuardControlsProps) -> Html {
    let onchange = {
        let cb = props.on_force.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.checked());
        })
    };
    let nudge = {
        let cb = props.on_nudge.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center; color:#c9d1d9;">
        <label>
            <input type="checkbox" checked={props.forced} {onchange} />
            {" force collision"}
        </label>
        <span style="width:8px;"></span>
        <button onclick={nudge}> {"Nudge camera"} </button>
    </div>}
}
