use crate::components::modal::Modal;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_accept: Callback<()>,
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(p: &Props) -> Html {
    let accept = {
        let cb = p.on_accept.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let footer = html! {
        <button type="button" class="btn btn--primary privacy__accept" onclick={accept}>
            { "I Understand & Accept" }
        </button>
    };

    html! {
        <Modal
            open={p.open}
            title="Privacy & Terms"
            on_close={p.on_close.clone()}
            return_focus_id={Some(AttrValue::from("privacy-open-btn"))}
            footer={footer}
        >
            <div class="privacy">
                <section>
                    <h3>{ "1. Introduction" }</h3>
                    <p>
                        { "Welcome to " }<strong>{ "The Playground" }</strong>
                        { ". By accessing this website and playing its games, you agree to the following Privacy Policy and Terms of Service." }
                    </p>
                </section>

                <h4 class="privacy__part">{ "Part I: Privacy Policy" }</h4>
                <section>
                    <h3>{ "2. Data Collection" }</h3>
                    <p>
                        { "Only anonymous usage data (browser type, region) may be collected. We do " }
                        <strong>{ "not" }</strong>
                        { " collect personally identifiable information, IP addresses, or use tracking cookies." }
                    </p>
                </section>
                <section>
                    <h3>{ "3. Local Storage" }</h3>
                    <p>
                        { "The games store data such as high scores and game state on your device using " }
                        <strong>{ "Local Storage" }</strong>
                        { ". This data is never transmitted to our servers. The portal itself only remembers that you accepted these terms." }
                    </p>
                </section>

                <h4 class="privacy__part">{ "Part II: Terms of Service" }</h4>
                <section>
                    <h3>{ "4. Medical Disclaimer" }</h3>
                    <div class="privacy__callout">
                        <p>{ "The games provided (specifically Dual N-Back) are for entertainment and educational purposes only." }</p>
                        <p>
                            { "While based on cognitive science concepts, this software is " }
                            <strong>{ "not a medical device" }</strong>
                            { " and is not intended to diagnose, treat, cure, or prevent any disease or condition. Please consult a healthcare professional for medical advice." }
                        </p>
                    </div>
                </section>
                <section>
                    <h3>{ "5. Disclaimer of Warranties" }</h3>
                    <p>{ "The software is provided \"AS IS\", without warranty of any kind. The creator is not liable for any damages arising from the use of this software." }</p>
                </section>
                <section>
                    <h3>{ "6. Intellectual Property" }</h3>
                    <p>{ "The code, design, and original content are the property of their author. You may play these games freely for personal, non-commercial use." }</p>
                </section>
            </div>
        </Modal>
    }
}
