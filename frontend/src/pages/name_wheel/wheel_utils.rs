use shared::constants::EMPTY_LIST_MESSAGE;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NameListProps {
    pub names: Vec<String>,
    pub on_remove: Callback<usize>,
}

#[function_component(NameList)]
pub fn name_list(props: &NameListProps) -> Html {
    if props.names.is_empty() {
        return html! {
            <p class={styles::TEXT_HINT}>{EMPTY_LIST_MESSAGE}</p>
        };
    }

    html! {
        <div class="flex flex-wrap gap-2">
            { for props.names.iter().enumerate().map(|(index, name)| {
                let on_remove = props.on_remove.clone();
                html! {
                    <span key={format!("{}-{}", index, name)} class={styles::NAME_PILL}>
                        <span class="truncate max-w-[10rem]" title={name.clone()}>{name.clone()}</span>
                        <button
                            title="Remove"
                            class="ml-1 text-gray-400 hover:text-red-500 transition-colors"
                            onclick={Callback::from(move |_: MouseEvent| on_remove.emit(index))}
                        >
                            {"✕"}
                        </button>
                    </span>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub last_winner: Option<String>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    match &props.last_winner {
        Some(name) => html! {
            <p class="mt-4 text-center text-gray-700 dark:text-gray-300">
                {"Last selected: "}<strong>{name.clone()}</strong>
            </p>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let label = if props.is_spinning { "Spinning..." } else { "Spin" };

    html! {
        <button
            class={classes!(styles::SPIN_BUTTON, props.disabled.then_some("opacity-60 cursor-not-allowed"))}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            {label}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    pub visible: bool,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let class = if props.visible { "show" } else { "hidden" };

    html! {
        <div class={classes!("confetti", class)} aria-hidden="true">
            { for (0..24).map(|i| html! {
                <span
                    class="confetti-piece"
                    style={format!("left: {}%; animation-delay: {}ms;", (i * 37) % 100, (i * 23) % 300)}
                />
            }) }
        </div>
    }
}
