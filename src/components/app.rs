use std::rc::Rc;

use yew::prelude::*;

use super::{camera_readout::CameraReadout, guard_controls::GuardControls};
use crate::collision::{NeverCollides, Toggle};
use crate::config::GuardConfig;
use crate::error::GuardError;
use crate::guard::CollisionGuard;
use crate::listener::{attach_to_document, subscribe_with};
use crate::model::{GuardStats, Position};
use crate::state::{Camera, SharedCamera};

const START: Position = Position::new(5.0, 3.0, -2.0);

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: GuardConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_memo((), {
        let config = props.config.clone();
        move |_| config
    });
    let camera = use_mut_ref(|| Camera::at(START));
    let toggle = use_memo((), |_| Toggle::default());
    let forced = use_state(|| false);
    let position = use_state(|| START);
    let stats = use_state(GuardStats::default);

    // Guard the in-app camera, and a host-page camera element if there is one.
    {
        let config = config.clone();
        let camera = camera.clone();
        let toggle = toggle.clone();
        let position = position.clone();
        let stats = stats.clone();
        use_effect_with((), move |_| {
            let guard = CollisionGuard::new(SharedCamera::from_rc(camera.clone()), (*toggle).clone())
                .with_safe_position(config.safe_position);
            let local = web_sys::window()
                .and_then(|win| win.document())
                .ok_or(GuardError::NoDocument)
                .and_then(|doc| {
                    subscribe_with(&doc, &config.event, Rc::new(guard), move |_, s| {
                        stats.set(s);
                        position.set(camera.borrow().position);
                    })
                });
            if let Err(e) = &local {
                log::error!("camera guard not attached: {e}");
            }
            let host = match attach_to_document(&config, NeverCollides) {
                Ok(sub) => Some(sub),
                Err(e) => {
                    log::info!("no host camera guarded: {e}");
                    None
                }
            };
            move || {
                if let Ok(sub) = local {
                    sub.dispose();
                }
                if let Some(sub) = host {
                    sub.dispose();
                }
            }
        });
    }

    let on_force = {
        let toggle = toggle.clone();
        let forced = forced.clone();
        Callback::from(move |on: bool| {
            toggle.set(on);
            forced.set(on);
        })
    };
    let on_nudge = {
        let camera = camera.clone();
        let position = position.clone();
        Callback::from(move |_| {
            let mut cam = camera.borrow_mut();
            cam.position = cam.position.offset(1.0, 1.0, -1.0);
            position.set(cam.position);
        })
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0d1117; overflow:hidden;">
            <CameraReadout position={*position} stats={*stats} forced={*forced} />
            <GuardControls forced={*forced} {on_force} {on_nudge} />
        </div>
    }
}
