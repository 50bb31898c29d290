//! Used-car quick-sale lead form page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only screen of the application. Field values and the submission
//! phase live in context signals provided by `App`; this page binds the
//! four controls, runs ordered validation on submit, and drives exactly
//! one POST per valid attempt.

use leptos::prelude::*;

use crate::state::form::{Field, FormFields, REGIONS, SubmitPhase};

#[cfg(test)]
#[path = "sell_test.rs"]
mod sell_test;

/// Submit button label for the current in-flight state.
fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "전송 중..."
    } else {
        "전송하기 — 빠른 견적 요청"
    }
}

/// Lead submission form: four bound fields, one error or success banner,
/// and a submit button disabled while a request is in flight.
#[component]
pub fn SellPage() -> impl IntoView {
    let fields = expect_context::<RwSignal<FormFields>>();
    let phase = expect_context::<RwSignal<SubmitPhase>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // The button is disabled while submitting; this guard covers
        // other submit triggers (e.g. Enter in a field).
        if phase.get_untracked().is_submitting() {
            return;
        }
        if let Err(msg) = fields.get_untracked().validate() {
            phase.set(SubmitPhase::Failed(msg.to_owned()));
            return;
        }
        phase.set(SubmitPhase::Submitting);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let snapshot = fields.get_untracked();
            match crate::net::api::submit_lead(&snapshot).await {
                Ok(()) => {
                    fields.update(FormFields::clear);
                    phase.set(SubmitPhase::Succeeded);
                }
                Err(msg) => {
                    log::warn!("lead submission failed: {msg}");
                    phase.set(SubmitPhase::Failed(msg));
                }
            }
        });
    };

    view! {
        <main class="sell-page">
            <section class="sell-page__header">
                <span class="sell-page__dot" aria-hidden="true"></span>
                <h2 class="sell-page__subtitle">"빠른 중고차 판매"</h2>
                <p class="sell-page__note">"● 10분 내 응답(근무시간)"</p>
            </section>

            <h1 class="sell-page__title">"중고차 빠른 판매 등록"</h1>
            <p class="sell-page__desc">
                "차량번호·연락처·지역·운행거리만 입력하세요. 전송 즉시 관리자가 알림을 받습니다."
            </p>

            <form class="sell-form" on:submit=on_submit>
                <label class="sell-form__label">
                    "차량번호 "
                    <span class="sell-form__hint">"(예: 12가3456)"</span>
                    <input
                        class="sell-form__input"
                        type="text"
                        placeholder="차량번호를 입력하세요"
                        prop:value=move || fields.get().plate_number
                        on:input=move |ev| {
                            fields.update(|f| f.set(Field::PlateNumber, &event_target_value(&ev)));
                        }
                    />
                </label>

                <label class="sell-form__label">
                    "연락처 "
                    <span class="sell-form__hint">"(휴대폰 번호, 숫자만)"</span>
                    <input
                        class="sell-form__input"
                        type="text"
                        inputmode="numeric"
                        placeholder="01012345678"
                        prop:value=move || fields.get().phone
                        on:input=move |ev| {
                            fields.update(|f| f.set(Field::Phone, &event_target_value(&ev)));
                        }
                    />
                </label>

                <label class="sell-form__label">
                    "지역"
                    <select
                        class="sell-form__input"
                        prop:value=move || fields.get().region
                        on:change=move |ev| {
                            fields.update(|f| f.set(Field::Region, &event_target_value(&ev)));
                        }
                    >
                        <option value="">"지역을 선택하세요"</option>
                        {REGIONS
                            .into_iter()
                            .map(|region| view! { <option value=region>{region}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="sell-form__label">
                    "운행거리 (km)"
                    <input
                        class="sell-form__input"
                        type="text"
                        inputmode="numeric"
                        placeholder="예: 120000"
                        prop:value=move || fields.get().mileage
                        on:input=move |ev| {
                            fields.update(|f| f.set(Field::Mileage, &event_target_value(&ev)));
                        }
                    />
                </label>

                <Show when=move || phase.get().error().is_some()>
                    <div class="sell-form__error">
                        {move || phase.get().error().map(str::to_owned).unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || phase.get().is_submitted()>
                    <div class="sell-form__success">
                        "전송이 완료되었습니다! 담당자가 곧 연락드립니다."
                    </div>
                </Show>

                <button
                    class="sell-form__submit"
                    type="submit"
                    disabled=move || phase.get().is_submitting()
                >
                    {move || submit_label(phase.get().is_submitting())}
                </button>

                <p class="sell-form__footnote">
                    "입력하신 정보는 판매 알선 목적 외에 사용되지 않습니다."
                </p>
            </form>
        </main>
    }
}
