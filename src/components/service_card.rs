use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub number: AttrValue,
    pub title: AttrValue,
    pub desc: AttrValue,
    pub image: AttrValue,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <img src={props.image.clone()} alt={props.title.clone()} loading="lazy" />
            <div class="service-card-body">
                <span class="service-number">{props.number.clone()}</span>
                <div class="service-text">
                    <h3>{props.title.clone()}</h3>
                    <p>{props.desc.clone()}</p>
                    <div class="service-underline"></div>
                </div>
            </div>
        </div>
    }
}
