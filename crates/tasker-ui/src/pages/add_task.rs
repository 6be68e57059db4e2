use yew::{Callback, Html, function_component, html};
use yew_router::prelude::use_navigator;

use crate::components::TaskForm;
use crate::routes::Route;

#[function_component(AddTaskPage)]
pub fn add_task_page() -> Html {
    let navigator = use_navigator().expect("navigator missing");

    let on_saved = {
        let navigator = navigator.clone();
        Callback::from(move |()| navigator.push(&Route::Tasks))
    };
    let on_cancel = Callback::from(move |()| navigator.push(&Route::Tasks));

    html! {
        <div class="page narrow">
            <TaskForm {on_saved} on_cancel={Some(on_cancel)} />
        </div>
    }
}
