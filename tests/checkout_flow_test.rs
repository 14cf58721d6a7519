use productor::application::checkout::CheckoutService;
use productor::application::session::{CheckoutSession, CheckoutStep, SelectionAction};
use productor::domain::catalog::{Addon, CakeSize, Shape};
use productor::domain::delivery::DeliveryDetails;
use productor::domain::money::Price;
use productor::domain::order::{Customer, OrderStatus};
use productor::error::ConfiguratorError;
use productor::infrastructure::in_memory::{
    InMemoryNotifier, InMemoryOrderStore, InMemoryPaymentGateway,
};

fn delivery() -> DeliveryDetails {
    DeliveryDetails {
        name: "Emeka Obi".to_string(),
        address: "12 Wuse Zone 4".to_string(),
        phone: "+234 809 555 0101".to_string(),
        state: "FCT".to_string(),
    }
}

#[tokio::test]
async fn test_full_checkout_flow() {
    let gateway = InMemoryPaymentGateway::new();
    let notifier = InMemoryNotifier::new();
    let service = CheckoutService::new(
        Box::new(InMemoryOrderStore::new()),
        Box::new(gateway.clone()),
        Box::new(notifier.clone()),
    );
    let customer = Customer::new("uid-7", "emeka@example.com");

    let mut session = CheckoutSession::new();
    assert!(!session.proceed());

    session.apply(SelectionAction::SetShape(Shape::Heart));
    session.apply(SelectionAction::SetSize(CakeSize::Twelve));
    session.apply(SelectionAction::SetLayers(2));
    session.apply(SelectionAction::SetFlavor("vanilla".to_string()));
    session.apply(SelectionAction::ToggleAddon(Addon::Fruit));
    session.apply(SelectionAction::ToggleAddon(Addon::Text));
    session.apply(SelectionAction::SetText("Congrats".to_string()));
    // 100 * 1.5 + 15 + 10
    assert_eq!(session.price(), Price::from(175));

    assert!(session.proceed());
    assert_eq!(session.step(), CheckoutStep::Authenticate);

    // Frozen once customizing is over
    assert!(!session.apply(SelectionAction::SetLayers(3)));
    assert_eq!(session.price(), Price::from(175));

    assert!(!session.proceed());
    session.sign_in(customer.clone());
    assert!(session.proceed());

    assert!(!session.proceed());
    let mut bad = delivery();
    bad.state = "Atlantis".to_string();
    assert!(matches!(
        session.set_delivery_details(bad),
        Err(ConfiguratorError::ValidationError(_))
    ));
    session.set_delivery_details(delivery()).unwrap();
    assert!(session.proceed());
    assert_eq!(session.step(), CheckoutStep::Payment);

    let order = service.place_order(&mut session).await.unwrap();
    assert_eq!(session.step(), CheckoutStep::Confirmation);
    assert_eq!(order.total(), Price::from(175));
    assert_eq!(order.config.delivery.state, "FCT");
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(gateway.charges().await.len(), 1);
    assert_eq!(notifier.sent().await.len(), 1);

    let history = service.order_history(&customer).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, order.id);

    let completed = service.complete_order(order.id).await.unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_unsigned_session_cannot_pay() {
    let service = CheckoutService::new(
        Box::new(InMemoryOrderStore::new()),
        Box::new(InMemoryPaymentGateway::new()),
        Box::new(InMemoryNotifier::new()),
    );

    let mut session = CheckoutSession::new();
    session.apply(SelectionAction::SetSize(CakeSize::Eight));
    session.apply(SelectionAction::SetFlavor("lemon".to_string()));
    assert!(session.proceed());
    session.sign_in(Customer::new("uid-8", "tolu@example.com"));
    assert!(session.proceed());
    session.set_delivery_details(delivery()).unwrap();
    assert!(session.proceed());

    session.sign_out();
    let result = service.place_order(&mut session).await;
    assert!(matches!(result, Err(ConfiguratorError::ValidationError(_))));
    assert_eq!(session.step(), CheckoutStep::Payment);
}
