use productor::domain::configuration::ProductConfiguration;
use productor::domain::money::Price;
use productor::domain::order::NewOrder;
use productor::domain::ports::{OrderNotifierBox, OrderStoreBox, PaymentGatewayBox};
use productor::infrastructure::in_memory::{
    InMemoryNotifier, InMemoryOrderStore, InMemoryPaymentGateway,
};

#[tokio::test]
async fn test_ports_as_trait_objects() {
    let order_store: OrderStoreBox = Box::new(InMemoryOrderStore::new());
    let payments: PaymentGatewayBox = Box::new(InMemoryPaymentGateway::new());
    let notifier: OrderNotifierBox = Box::new(InMemoryNotifier::new());

    // Verify Send + Sync by spawning tasks
    let payment_handle = tokio::spawn(async move {
        payments
            .charge("ada@example.com", Price::from(28))
            .await
            .unwrap()
    });
    let receipt = payment_handle.await.unwrap();
    assert_eq!(receipt.amount, Price::from(28));

    let store_handle = tokio::spawn(async move {
        let order = order_store
            .insert(NewOrder {
                customer_id: "uid-1".to_string(),
                config: ProductConfiguration::default(),
                payment_reference: receipt.reference,
            })
            .await
            .unwrap();
        notifier
            .order_confirmed(&order, "ada@example.com")
            .await
            .unwrap();
        order_store.get(order.id).await.unwrap().unwrap()
    });

    let retrieved = store_handle.await.unwrap();
    assert_eq!(retrieved.id, 1);
    assert_eq!(retrieved.customer_id, "uid-1");
}
