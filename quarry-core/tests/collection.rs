#[cfg(test)]
mod tests {
    use quarry_core::{
        Collection, CollectionRef, Condition, Expression, Field, IntField, Operator, Select,
        StringField,
    };

    struct Products {
        sku: StringField,
        stock: IntField,
    }

    const PRODUCTS: Products = Products {
        sku: StringField::new("sku"),
        stock: IntField::new("stock"),
    };

    impl Collection for Products {
        fn collection(&self) -> CollectionRef {
            CollectionRef::new("products")
        }
    }

    #[test]
    fn descriptors() {
        assert_eq!(PRODUCTS.sku.name(), "sku");
        assert_eq!(PRODUCTS.stock.field(), &Field::new("stock"));
        assert_eq!(Field::from(PRODUCTS.sku.clone()), Field::new("sku"));
        assert_eq!(PRODUCTS.collection().path(), "products");
    }

    #[test]
    fn descriptor_conditions() {
        let condition = PRODUCTS.sku.equal_to_string("A-1");
        assert_eq!(condition.to_string(), "[sku] == 'A-1'");
        assert_eq!(condition, Field::new("sku").equal_to("A-1"));

        let condition = PRODUCTS.stock.equal_to_int(0);
        assert_eq!(condition.operator(), Operator::Equal);
        let Condition::Equal(equal) = &condition else {
            panic!("Expected an equal condition");
        };
        assert_eq!(equal.lhs(), Some(&Expression::Field(Field::new("stock"))));
        assert_eq!(equal.rhs(), Some(&Expression::from(0)));
    }

    #[test]
    fn declared_query() {
        let query = Select::new(PRODUCTS.collection()).filter(
            PRODUCTS
                .sku
                .equal_to_string("A-1")
                .and(PRODUCTS.stock.equal_to_int(3)),
        );
        assert_eq!(
            query.to_string(),
            "SELECT * FROM products WHERE [sku] == 'A-1' AND [stock] == 3"
        );
    }
}
