use super::*;

#[test]
fn element_ids_follow_modal_prefix() {
    assert_eq!(
        ElementId::new(Modal::Edit, Field::Category).to_string(),
        "edit-category"
    );
    assert_eq!(ElementId::new(Modal::Delete, Field::Id).to_string(), "delete-id");
    assert_eq!(ElementId::new(Modal::Add, Field::Price).to_string(), "add-price");
}

#[test]
fn admin_page_registers_every_contract_element() {
    let form = InMemoryForm::admin_page();

    for field in Modal::Edit.inputs() {
        assert_eq!(
            form.input_value(ElementId::new(Modal::Edit, *field)),
            Ok(String::new())
        );
    }
    assert_eq!(Modal::Edit.inputs().len(), 7);
    assert_eq!(Modal::Add.inputs().len(), 6);
    assert!(form.input_value(ElementId::new(Modal::Add, Field::Id)).is_err());
    assert_eq!(
        form.text(ElementId::new(Modal::Delete, Field::Name)),
        Ok(String::new())
    );
}

#[test]
fn missing_elements_are_reported_by_id() {
    let form = InMemoryForm::new();
    let err = form
        .set_input_value(ElementId::new(Modal::Edit, Field::Sku), "A1")
        .expect_err("no element registered");
    assert_eq!(err, FormError::MissingElement("edit-sku".to_string()));
}

#[test]
fn inputs_and_texts_are_separate_regions() {
    let form = InMemoryForm::admin_page();
    let name = ElementId::new(Modal::Delete, Field::Name);

    form.set_text(name, "Widget").expect("set text");
    assert_eq!(form.text(name), Ok("Widget".to_string()));
    assert!(form.input_value(name).is_err());
}
